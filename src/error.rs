use thiserror::Error;

/// Errors surfaced by tokenization, vectorization and related-item ranking.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was absent or outside its domain
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Item index does not address a vector of the corpus
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
