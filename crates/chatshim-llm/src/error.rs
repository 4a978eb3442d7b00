use thiserror::Error;

/// Unified error type for the adapter and its backends.
///
/// `InvalidArgument` is the only variant the adapter raises itself; every
/// other variant comes from a backend and reaches the caller untouched.
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("rate limited, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LLMError {
    /// Check if this error was raised by input validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, LLMError>;
