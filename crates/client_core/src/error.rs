use shared::error::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend answered {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },
    #[error("invalid product payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http { .. } | Self::Decode { .. } => None,
        }
    }
}
