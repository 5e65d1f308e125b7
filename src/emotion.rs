//! Keyword emotion detector.
//!
//! Scans normalised tokens for a small set of sad and happy keywords. Sad
//! keywords are checked first. A detected emotion ends the turn early: the
//! responder answers with the matching pseudo-phrase (`"i am sad"` /
//! `"i am happy"`) instead of running the matcher.

use crate::catalog::{self, Phrase};

/// Emotion carried by a single utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emotion {
    /// A sad keyword was present.
    Sad,
    /// A happy keyword was present (and no sad one).
    Happy,
    /// No emotion keyword.
    #[default]
    None,
}

impl Emotion {
    /// Catalog pseudo-phrase answering this emotion, if any.
    pub fn phrase(self) -> Option<Phrase> {
        match self {
            Emotion::Sad => Some(catalog::SAD),
            Emotion::Happy => Some(catalog::HAPPY),
            Emotion::None => None,
        }
    }
}

// ── Keyword tables ──────────────────────────────────────────────────────

const SAD_WORDS: &[&str] = &["sad", "unhappy", "depressed", "down", "miserable"];

const HAPPY_WORDS: &[&str] = &["happy", "glad", "joy", "great", "good", "fine"];

/// Detect the emotion of an utterance from its normalised tokens.
///
/// Tokens are compared whole, so `"sadness"` is not sad and an expanded
/// abbreviation like `"gr8"` → `"great"` is happy.
pub fn detect_emotion<I, S>(tokens: I) -> Emotion
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut happy = false;
    for token in tokens {
        let token = token.as_ref();
        if SAD_WORDS.contains(&token) {
            return Emotion::Sad;
        }
        happy |= HAPPY_WORDS.contains(&token);
    }
    if happy { Emotion::Happy } else { Emotion::None }
}
