//! Error definitions for the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Auth error (status {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl Error {
    /// 根据 HTTP 状态码归类错误。
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Auth { status, message },
            _ => Self::Network {
                message: format!("registry returned status {status}: {message}"),
            },
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        if source.is_decode() {
            Self::MalformedResponse {
                message: source.to_string(),
            }
        } else {
            Self::Network {
                message: source.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedResponse {
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
