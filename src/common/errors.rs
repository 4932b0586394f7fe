use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Page '{0}' not found")]
    NotFound(String),

    #[error("Invalid page slug: {0}")]
    InvalidSlug(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
}
