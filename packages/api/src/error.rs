use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`] calls.
///
/// None of these reach the user: callers log the error and keep whatever
/// state they already had.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, decode error, offline)
    /// before a usable response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered, but with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
