use thiserror::Error;

/// Unified error type for find-fix operations
///
/// The tag comparison core itself never fails (malformed input degrades to
/// "incomparable" instead), so errors only arise on the configuration and
/// input-reading surface.
#[derive(Error, Debug)]
pub enum FindFixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag source error: {0}")]
    Source(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in find-fix
pub type Result<T> = std::result::Result<T, FindFixError>;

impl FindFixError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FindFixError::Config(msg.into())
    }

    /// Create a tag source error with context
    pub fn source(msg: impl Into<String>) -> Self {
        FindFixError::Source(msg.into())
    }
}
