//! Matcher thresholds.
//!
//! [`MatchConfig`] holds the similarity cut-offs used by the matcher stages.
//! The defaults reproduce the classic 0.6 close-match cut-off.

use crate::error::MatchError;

/// Default cut-off for whole-sentence and single-token matches (inclusive).
pub const DEFAULT_SENTENCE_THRESHOLD: f32 = 0.6;

/// Default cut-off for per-word coverage matches (exclusive).
pub const DEFAULT_WORD_THRESHOLD: f32 = 0.6;

/// Similarity thresholds for a [`crate::FuzzyMatcher`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Minimum ratio (inclusive) for stage 1 and stage 3 hits.
    pub sentence_threshold: f32,
    /// Ratio a phrase word must strictly exceed against some input token in
    /// stage 2.
    pub word_threshold: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sentence_threshold: DEFAULT_SENTENCE_THRESHOLD,
            word_threshold: DEFAULT_WORD_THRESHOLD,
        }
    }
}

impl MatchConfig {
    /// Validates this configuration.
    ///
    /// Both thresholds must be finite and lie in `(0, 1]`. A zero threshold
    /// would let any phrase match any input.
    pub fn validate(&self) -> Result<(), MatchError> {
        check_threshold("sentence_threshold", self.sentence_threshold)?;
        check_threshold("word_threshold", self.word_threshold)?;
        Ok(())
    }
}

fn check_threshold(name: &str, value: f32) -> Result<(), MatchError> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(MatchError::Config(format!(
            "{name} must be in (0, 1], got {value}"
        )));
    }
    Ok(())
}
