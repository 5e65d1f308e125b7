//! # parley-match
//!
//! Fuzzy phrase matching for Parley's rule-based responder.
//!
//! This crate turns noisy free text into one of a fixed set of known phrases.
//! It knows nothing about replies or dialogue state; the `parley` crate owns
//! those.
//!
//! ## Design
//!
//! - [`normalize`] lower-cases, tokenises and expands chat shorthand
//! - [`similarity::ratio`] scores two strings in `0.0..=1.0` from a minimal
//!   character diff
//! - [`FuzzyMatcher`] runs three matching stages (whole sentence, per-word
//!   coverage, single token) over a longest-first phrase list
//! - Matching is total: any input, including empty, yields a result or `None`

pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod similarity;

pub use config::MatchConfig;
pub use error::{MatchError, Result};
pub use matcher::{FuzzyMatcher, MatchStage, PhraseMatch};
pub use normalize::{Token, normalize};

/// Normalise `text` and match it against `matcher` in one call.
///
/// # Examples
///
/// ```
/// let matcher = parley_match::FuzzyMatcher::new(["how are you", "bye"]);
/// let hit = parley_match::classify(&matcher, "hw r u").expect("close enough");
/// assert_eq!(hit.phrase, "how are you");
/// ```
pub fn classify<'m>(matcher: &'m FuzzyMatcher, text: &str) -> Option<PhraseMatch<'m>> {
    matcher.match_tokens(normalize(text))
}
