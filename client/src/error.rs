use thiserror::Error;

/// Failures of a single query run. None of them are retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The exchange broke at the network level: DNS, refused connection, TLS
    /// or timeout. A connection that drops or times out while the body is
    /// still streaming also lands here, even though a status line arrived.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API returned status code {status}")]
    Remote { status: u16, body: String },

    /// 2xx status, but the body does not carry a usable `answers` list.
    #[error("Unexpected response shape: {reason}")]
    ResponseShape {
        status: u16,
        body: String,
        reason: String,
    },

    /// Rejected locally before anything was sent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_timeout())
    }

    /// HTTP status, when the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } | ClientError::ResponseShape { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
