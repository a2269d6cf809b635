//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// The request never produced a response (DNS, connectivity, CORS).
    ///
    /// The payload keeps the underlying reason for logging; the displayed
    /// message stays generic.
    #[error("Network error: Unable to connect to GitHub. Please check your internet connection.")]
    Network(String),
    /// Non-2xx, non-404 response from the contents API
    #[error("GitHub API error: {status} {status_text}")]
    RemoteApi { status: u16, status_text: String },
    /// Non-2xx response outside the contents API (raw file downloads)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}
