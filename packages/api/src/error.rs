use thiserror::Error;

/// Errors that can occur when talking to the shelf service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, or body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request requires authentication.
    #[error("Unauthorized")]
    Unauthorized,
}
