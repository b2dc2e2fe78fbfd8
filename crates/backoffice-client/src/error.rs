use backoffice_shared::EnvelopeError;
use backoffice_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures of the request wrapper.
///
/// `code`/`msg` of a decoded envelope are never turned into an `ApiError`;
/// callers interpret them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("API Error: {text}")]
    Status { status: u16, text: String },

    /// DNS, connect, timeout, or a body that could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Outcome of a failed [`login`](crate::session::SessionContext::login).
/// The `Display` text is what the login screen shows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),

    #[error("Network error occurred")]
    Network,

    #[error("Could not save session: {0}")]
    Storage(String),
}

/// Umbrella error for callers that mix the layers.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
