//! Error types for the parley-match crate.
//!
//! Matching itself is total; errors only arise while building a matcher.

/// Errors that can occur while constructing a [`crate::FuzzyMatcher`].
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for parley-match results.
pub type Result<T> = std::result::Result<T, MatchError>;
