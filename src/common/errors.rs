use thiserror::Error;

/// Failures of a single upstream call. Never retried by the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),

    #[error("invalid proxy {url}: {reason}")]
    InvalidProxy { url: String, reason: String },
}

impl TransportError {
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if *status == code)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A top-level shape that every known response variant carries was absent.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(&'static str),

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config not found: {0}")]
    ConfigMissing(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(TransportError::MalformedEnvelope(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(err))
    }
}
