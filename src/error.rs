//! Error types for parley.
//!
//! Producing a reply never fails; errors only come from configuration and
//! engine construction.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum ParleyError {
    /// Configuration error (parse failure or invalid value).
    #[error("config error: {0}")]
    Config(String),

    /// Phrase matcher construction error.
    #[error(transparent)]
    Match(#[from] parley_match::MatchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ParleyError>;
