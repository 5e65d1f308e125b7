//! Per-conversation dialogue state.

use crate::catalog::Phrase;
use std::collections::{BTreeSet, VecDeque};

/// Everything the responder remembers about one conversation.
///
/// Owned by exactly one session and mutated once per turn. Nothing here
/// outlives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueState {
    last_intent: Option<Phrase>,
    topics: BTreeSet<Phrase>,
    user_name: Option<String>,
    history: VecDeque<String>,
    max_history: usize,
}

impl DialogueState {
    /// Fresh state with unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state keeping at most `max_history` utterances (0 = unbounded).
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            max_history,
            ..Self::default()
        }
    }

    /// Most recently answered intent.
    pub fn last_intent(&self) -> Option<Phrase> {
        self.last_intent
    }

    /// Topics covered so far, in sorted order.
    pub fn topics(&self) -> impl Iterator<Item = Phrase> + '_ {
        self.topics.iter().copied()
    }

    /// Returns `true` if `phrase` has been discussed.
    pub fn has_topic(&self, phrase: &str) -> bool {
        self.topics.contains(phrase)
    }

    /// The user's name, once introduced.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Raw utterances, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Number of retained utterances.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Topics joined as `"a, b, c"` in sorted order, or `None` if there are
    /// none.
    pub fn topics_summary(&self) -> Option<String> {
        if self.topics.is_empty() {
            return None;
        }
        Some(self.topics().collect::<Vec<_>>().join(", "))
    }

    pub(crate) fn record_utterance(&mut self, utterance: &str) {
        self.history.push_back(utterance.to_owned());
        if self.max_history > 0 {
            while self.history.len() > self.max_history {
                self.history.pop_front();
            }
        }
    }

    pub(crate) fn set_last_intent(&mut self, phrase: Phrase) {
        self.last_intent = Some(phrase);
    }

    pub(crate) fn add_topic(&mut self, phrase: Phrase) -> bool {
        self.topics.insert(phrase)
    }

    /// Stores the name unless one is already known. Returns `true` if stored.
    pub(crate) fn set_user_name(&mut self, name: String) -> bool {
        if self.user_name.is_some() {
            return false;
        }
        self.user_name = Some(name);
        true
    }
}
