//! Turn resolution stages.
//!
//! A turn walks [`TurnStage::ORDER`] and stops at the first stage that
//! produces a reply. [`TurnStage::Fallback`] always replies, so every turn
//! ends with text.

use crate::catalog::{Phrase, VAGUE_TRIGGERS};
use parley_match::{Token, normalize};
use std::fmt;

/// A named decision step of the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnStage {
    /// "my name is X" while no name is known.
    IntroduceName,
    /// Sad or happy keyword present.
    Emotion,
    /// "what did we talk about" anywhere in the input.
    MemoryRecall,
    /// The whole input is a bare follow-up such as "tell me more".
    FollowUp,
    /// Fuzzy phrase match.
    IntentMatch,
    /// A follow-up trigger somewhere in unmatched input.
    VagueRecall,
    /// Nothing else applied.
    Fallback,
}

impl TurnStage {
    /// Stages in evaluation order.
    pub const ORDER: [TurnStage; 7] = [
        TurnStage::IntroduceName,
        TurnStage::Emotion,
        TurnStage::MemoryRecall,
        TurnStage::FollowUp,
        TurnStage::IntentMatch,
        TurnStage::VagueRecall,
        TurnStage::Fallback,
    ];

    /// Stable snake_case name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            TurnStage::IntroduceName => "introduce_name",
            TurnStage::Emotion => "emotion",
            TurnStage::MemoryRecall => "memory_recall",
            TurnStage::FollowUp => "follow_up",
            TurnStage::IntentMatch => "intent_match",
            TurnStage::VagueRecall => "vague_recall",
            TurnStage::Fallback => "fallback",
        }
    }
}

impl fmt::Display for TurnStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single stage decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage answered the turn.
    Reply {
        /// Reply text.
        text: String,
        /// Intent the reply answers, if any.
        intent: Option<Phrase>,
    },
    /// Hand the turn to the next stage.
    Pass,
}

impl StageOutcome {
    pub(crate) fn reply(text: impl Into<String>, intent: Option<Phrase>) -> Self {
        StageOutcome::Reply {
            text: text.into(),
            intent,
        }
    }
}

/// Result of a full turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the user. Never empty.
    pub text: String,
    /// Stage that produced the text.
    pub stage: TurnStage,
    /// Intent the reply answers, if any.
    pub intent: Option<Phrase>,
}

/// One utterance, pre-processed once for all stages.
#[derive(Debug, Clone)]
pub struct Turn<'u> {
    raw: &'u str,
    lower: String,
    tokens: Vec<Token>,
}

impl<'u> Turn<'u> {
    /// Lower-case and normalise `raw`.
    pub fn new(raw: &'u str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
            tokens: normalize(raw),
        }
    }

    /// The utterance as typed.
    pub fn raw(&self) -> &'u str {
        self.raw
    }

    /// The utterance lower-cased, punctuation intact.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Normalised tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns `true` if the normalised utterance is exactly a follow-up
    /// trigger ("tell me more", "why", ...).
    pub fn is_bare_follow_up(&self) -> bool {
        let sentence = self.tokens.join(" ");
        VAGUE_TRIGGERS.contains(&sentence.as_str())
    }

    /// Returns `true` if any follow-up trigger occurs in the lower-cased text.
    pub fn mentions_follow_up(&self) -> bool {
        VAGUE_TRIGGERS
            .iter()
            .any(|trigger| self.lower.contains(trigger))
    }
}
