use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {field} number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Cannot bump {field}: value out of range")]
    Overflow { field: &'static str },

    #[error("No versions found, please create an initial version tag")]
    NoVersionsFound,

    #[error("Repository has no commits to tag")]
    EmptyRepository,

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpError::Tag(msg.into())
    }
}
