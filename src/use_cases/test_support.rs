use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{BackendError, BackendReply, BackendRequest, ClientPlatform, JudgeBackend};

// What the fake backend answers with.
#[derive(Clone)]
pub(crate) enum Scripted {
    Reply { status: u16, body: Value },
    TransportFailure,
    DecodeFailure,
}

// Fake backend that records every request it receives.
#[derive(Clone)]
pub(crate) struct RecordingBackend {
    script: Scripted,
    requests: Arc<Mutex<Vec<BackendRequest>>>,
}

impl RecordingBackend {
    pub(crate) fn replying(status: u16, body: Value) -> Self {
        Self::scripted(Scripted::Reply { status, body })
    }

    pub(crate) fn scripted(script: Scripted) -> Self {
        Self {
            script,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<BackendRequest> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl JudgeBackend for RecordingBackend {
    async fn forward(&self, req: BackendRequest) -> Result<BackendReply, BackendError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(req);

        match &self.script {
            Scripted::Reply { status, body } => Ok(BackendReply {
                status: *status,
                body: body.clone(),
            }),
            Scripted::TransportFailure => {
                Err(BackendError::Transport("connection refused".to_string()))
            }
            Scripted::DecodeFailure => Err(BackendError::Decode("expected value".to_string())),
        }
    }
}

// Client platform that records side effects in order.
#[derive(Clone, Default)]
pub(crate) struct RecordingPlatform {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlatform {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().expect("events mutex poisoned").clone()
    }
}

impl ClientPlatform for RecordingPlatform {
    fn clear_storage(&self) {
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push("clear".to_string());
    }

    fn navigate(&self, location: &str) {
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(format!("navigate {location}"));
    }
}
