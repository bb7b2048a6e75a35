use crate::domain::{BackendError, BackendMethod, BackendReply, BackendRequest, JudgeBackend};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

// Thin wrapper around reqwest for judge backend calls.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    pub base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl JudgeBackend for BackendClient {
    async fn forward(&self, req: BackendRequest) -> Result<BackendReply, BackendError> {
        let url = format!("{}{}", self.base_url, req.path);
        let method = match req.method {
            BackendMethod::Get => Method::GET,
            BackendMethod::Post => Method::POST,
        };

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(authorization) = &req.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let res = builder
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;
        let status = res.status().as_u16();

        // Error replies are JSON too; a body that is not JSON fails the call.
        let body = res
            .json::<Value>()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))?;

        Ok(BackendReply { status, body })
    }
}
