use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifyError>;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// Connection, TLS, timeout or malformed URL from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("payload encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Raised by a caller-supplied transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// Webhook answered with a non-2xx status.
    #[error("webhook rejected payload with status {0}")]
    Status(u16),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

impl NotifyError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
