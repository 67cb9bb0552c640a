use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum PosternCacheError {
    /// An error that occurs when fetching a value from a backend
    #[error("Failed to fetch from backend: {0}")]
    FetchFailed(String),
}
