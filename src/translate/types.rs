// translate/types.rs
// Translation provider error types

use thiserror::Error;

/// Provider-internal failures. These never escape the fallback chain; the
/// chain absorbs them and moves on to the next provider.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    TimeoutError,

    #[error("Authentication failed")]
    AuthenticationError,

    #[error("Rate limit exceeded")]
    RateLimitError,

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid response from provider")]
    InvalidResponse,
}

impl TranslateError {
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslateError::TimeoutError
        } else {
            TranslateError::NetworkError(err.to_string())
        }
    }
}
