use thiserror::Error;

/// Crate-wide error type.
///
/// Transport and decoding failures are surfaced to callers unchanged (no
/// retry, no backoff); authentication failures carry the human-readable
/// message shown at the login/register forms.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response schema mismatch: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("no access token in the credential store")]
    Unauthenticated,

    #[error("{0}")]
    Auth(String),

    #[error("account already registered")]
    AlreadyRegistered,

    #[error("credential store error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// True for failures that should keep the user on the current form with
    /// a message, rather than being treated as a broken session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Auth(_) | ClientError::AlreadyRegistered)
    }
}
