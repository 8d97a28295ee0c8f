//! API Errors

use thiserror::Error;

use crate::models::ItemId;

/// Result type for everything that goes through the cart backend
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the API client and controller
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Response body was not the expected JSON
    #[error("malformed response: {0}")]
    Decode(String),

    /// A click referenced an inventory id the state does not hold
    #[error("inventory item {0} not found")]
    NotFound(ItemId),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
