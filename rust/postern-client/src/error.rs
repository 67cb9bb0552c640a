use postern_cache::PosternCacheError;
use thiserror::Error;

/// Errors that can occur when talking to the security API
#[derive(Error, Debug)]
pub enum SecurityClientError {
    /// Error that occurs when connecting to the API fails
    #[error("Failed to connect to security API: {0}")]
    ConnectionFailed(String),

    /// Error that occurs when a request cannot be constructed or performed
    #[error("Failed to perform security API request: {0}")]
    RequestFailed(String),

    /// Error that occurs when the API answers with an unexpected status
    #[error("Security API request failed with status {status}: {message}")]
    UnexpectedStatus {
        /// The HTTP status code of the response.
        status: u16,
        /// The status text, when one is known.
        message: String,
    },

    /// Error that occurs when a response body cannot be deserialized
    #[error("Failed to deserialize security API response: {0}")]
    DeserializationFailed(String),
}

impl SecurityClientError {
    /// The HTTP status code carried by this error, when the server answered
    /// at all. This is the value to feed a transport-error classifier.
    pub fn status(&self) -> Option<u16> {
        match self {
            SecurityClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SecurityClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            SecurityClientError::ConnectionFailed(error.to_string())
        } else if error.is_decode() {
            SecurityClientError::DeserializationFailed(error.to_string())
        } else if let Some(status) = error.status() {
            SecurityClientError::UnexpectedStatus {
                status: status.as_u16(),
                message: error.to_string(),
            }
        } else {
            SecurityClientError::RequestFailed(error.to_string())
        }
    }
}

impl From<SecurityClientError> for PosternCacheError {
    fn from(error: SecurityClientError) -> Self {
        PosternCacheError::FetchFailed(error.to_string())
    }
}
