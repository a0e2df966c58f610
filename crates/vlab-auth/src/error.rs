//! Error types for vlab-auth.

use thiserror::Error;

/// Shown for transport failures and unreadable bodies.
pub const NETWORK_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network: {0}")]
    Network(String),

    /// 401 from the backend: the token is missing, expired or wrong.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx answer.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed body: {0}")]
    Parse(#[from] serde_json::Error),

    /// A protected action without a stored token.
    #[error("not logged in")]
    NotLoggedIn,
}

impl AuthError {
    /// Text for the page's error banner.
    pub fn message(&self) -> String {
        match self {
            AuthError::Network(_) | AuthError::Parse(_) => NETWORK_MESSAGE.to_string(),
            AuthError::Unauthorized(m) | AuthError::Rejected { message: m, .. } => m.clone(),
            AuthError::NotLoggedIn => "Please login to view your profile".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::Unauthorized(_))
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
