//! Three-stage fuzzy phrase matcher.
//!
//! Maps a normalised token sequence to at most one known phrase:
//!
//! 1. **Whole sentence**: the joined tokens against every phrase.
//! 2. **Word coverage**: every word of a phrase is approximately present
//!    among the tokens.
//! 3. **Single token**: each token on its own against every phrase.
//!
//! The first stage producing a hit wins. Phrases are kept sorted by
//! character length, longest first, so multi-word phrases are preferred over
//! shorter ones that merely share a word.

use crate::config::MatchConfig;
use crate::error::Result;
use crate::similarity::{best_match, ratio};
use std::cmp::Reverse;
use std::fmt;

/// Which matcher stage produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStage {
    /// Joined sentence approximately equals a phrase.
    WholeSentence,
    /// Every phrase word approximately appears among the tokens.
    WordCoverage,
    /// A single token approximately equals a phrase.
    SingleToken,
}

impl MatchStage {
    /// Stages in evaluation order.
    pub const ORDER: [MatchStage; 3] = [
        MatchStage::WholeSentence,
        MatchStage::WordCoverage,
        MatchStage::SingleToken,
    ];
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchStage::WholeSentence => "whole_sentence",
            MatchStage::WordCoverage => "word_coverage",
            MatchStage::SingleToken => "single_token",
        };
        f.write_str(name)
    }
}

/// A matched phrase and the evidence for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhraseMatch<'a> {
    /// The matched phrase, borrowed from the matcher.
    pub phrase: &'a str,
    /// Stage that produced the hit.
    pub stage: MatchStage,
    /// Similarity that justified the hit. For word coverage this is the
    /// weakest of the per-word best scores.
    pub score: f32,
}

/// Approximate matcher over a fixed phrase list.
///
/// Immutable after construction; share it freely between sessions and
/// threads.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    phrases: Vec<String>,
    config: MatchConfig,
}

impl FuzzyMatcher {
    /// Build a matcher with the default thresholds.
    ///
    /// Phrases are sorted by character length, longest first; phrases of
    /// equal length keep their input order. An empty phrase list is allowed
    /// and matches nothing.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(phrases, MatchConfig::default())
    }

    /// Build a matcher with explicit thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Config`](crate::MatchError::Config) if either
    /// threshold is outside `(0, 1]`.
    pub fn with_config<I, S>(phrases: I, config: MatchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        Ok(Self::build(phrases, config))
    }

    fn build<I, S>(phrases: I, config: MatchConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        phrases.sort_by_key(|p| Reverse(p.chars().count()));
        tracing::debug!(count = phrases.len(), "built fuzzy matcher");
        Self { phrases, config }
    }

    /// Phrases in matching priority order (longest first).
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Thresholds in use.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match a token sequence against the phrase list.
    ///
    /// Returns `None` when no stage finds a phrase, including for an empty
    /// token sequence.
    pub fn match_tokens<I, S>(&self, tokens: I) -> Option<PhraseMatch<'_>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = tokens.into_iter().collect();
        let words: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();
        let hit = MatchStage::ORDER
            .into_iter()
            .find_map(|stage| self.run_stage(stage, &words));
        match &hit {
            Some(m) => {
                tracing::debug!(stage = %m.stage, phrase = m.phrase, score = m.score, "phrase matched");
            }
            None => tracing::debug!("no phrase matched"),
        }
        hit
    }

    fn run_stage(&self, stage: MatchStage, words: &[&str]) -> Option<PhraseMatch<'_>> {
        match stage {
            MatchStage::WholeSentence => self.whole_sentence(words),
            MatchStage::WordCoverage => self.word_coverage(words),
            MatchStage::SingleToken => self.single_token(words),
        }
    }

    fn whole_sentence(&self, words: &[&str]) -> Option<PhraseMatch<'_>> {
        if words.is_empty() {
            return None;
        }
        let sentence = words.join(" ");
        self.closest(&sentence, MatchStage::WholeSentence)
    }

    fn word_coverage(&self, words: &[&str]) -> Option<PhraseMatch<'_>> {
        if words.is_empty() {
            return None;
        }
        self.phrases.iter().find_map(|phrase| {
            let score = coverage_score(phrase, words, self.config.word_threshold)?;
            Some(PhraseMatch {
                phrase: phrase.as_str(),
                stage: MatchStage::WordCoverage,
                score,
            })
        })
    }

    fn single_token(&self, words: &[&str]) -> Option<PhraseMatch<'_>> {
        words
            .iter()
            .find_map(|word| self.closest(word, MatchStage::SingleToken))
    }

    fn closest(&self, query: &str, stage: MatchStage) -> Option<PhraseMatch<'_>> {
        best_match(query, self.phrases(), self.config.sentence_threshold).map(|(phrase, score)| {
            PhraseMatch {
                phrase,
                stage,
                score,
            }
        })
    }
}

/// Weakest per-word best score if every phrase word has some token scoring
/// strictly above `threshold`, otherwise `None`.
fn coverage_score(phrase: &str, words: &[&str], threshold: f32) -> Option<f32> {
    let mut weakest = f32::INFINITY;
    for phrase_word in phrase.split_whitespace() {
        let best = words
            .iter()
            .map(|word| ratio(phrase_word, word))
            .fold(0.0_f32, f32::max);
        if best <= threshold {
            return None;
        }
        weakest = weakest.min(best);
    }
    weakest.is_finite().then_some(weakest)
}
