use std::env;
use std::net::{IpAddr, SocketAddr};
use url::Url;

// Runtime settings, read from the environment (and `.env` when present).

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    // Base URL of the judge backend, without a trailing '/'.
    pub backend_url: String,
    pub addr: SocketAddr,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BACKEND_URL {value:?}: {source}")]
    BackendUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("BACKEND_URL must use http or https, got {0:?}")]
    BackendScheme(String),
    #[error("invalid WEB_HOST {0:?}")]
    Host(String),
    #[error("invalid WEB_PORT {0:?}")]
    Port(String),
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Unset and blank variables both fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let backend_url =
            backend_url(read("BACKEND_URL").as_deref().unwrap_or(DEFAULT_BACKEND_URL))?;

        let host = read("WEB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::Host(host.clone()))?;
        let port = match read("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Port(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            backend_url,
            addr: SocketAddr::new(host, port),
        })
    }
}

fn backend_url(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).map_err(|source| ConfigError::BackendUrl {
        value: raw.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::BackendScheme(parsed.scheme().to_string()));
    }

    // Route paths start with '/', so the base must not end with one.
    Ok(raw.trim_end_matches('/').to_string())
}
