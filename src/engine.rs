//! Response engine: turns one utterance into one reply.
//!
//! The [`Engine`] holds the read-only parts (catalog and matcher) behind an
//! `Arc` and is cheap to clone. Per-conversation data lives in
//! [`DialogueState`], owned by the caller or by a [`Session`].

use crate::catalog::{
    self, Catalog, DEFAULT, MEMORY, Phrase, ResponseTemplate, SPECIFY_REPLY, SUGGESTIONS,
};
use crate::chooser::{Chooser, RandomChooser};
use crate::config::{ParleyConfig, SessionConfig};
use crate::emotion::detect_emotion;
use crate::error::Result;
use crate::name::extract_name;
use crate::state::DialogueState;
use crate::turn::{Reply, StageOutcome, Turn, TurnStage};
use parley_match::{FuzzyMatcher, MatchConfig};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Shared, immutable responder.
#[derive(Debug, Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

#[derive(Debug)]
struct EngineInner {
    catalog: &'static Catalog,
    matcher: FuzzyMatcher,
    session: SessionConfig,
}

impl Engine {
    /// Build an engine over the built-in catalog with default settings.
    pub fn initialize() -> Self {
        let catalog = Catalog::builtin();
        let engine = Self::from_parts(
            catalog,
            FuzzyMatcher::new(catalog.phrases()),
            SessionConfig::default(),
        );
        info!(phrases = catalog.len(), "engine initialized");
        engine
    }

    /// Build an engine from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(config: &ParleyConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected engine config");
            return Err(e);
        }
        let catalog = Catalog::builtin();
        let matcher =
            FuzzyMatcher::with_config(catalog.phrases(), MatchConfig::from(&config.matcher))?;
        info!(
            phrases = catalog.len(),
            sentence_threshold = config.matcher.sentence_threshold,
            word_threshold = config.matcher.word_threshold,
            max_history = config.session.max_history,
            "engine initialized"
        );
        Ok(Self::from_parts(catalog, matcher, config.session.clone()))
    }

    fn from_parts(catalog: &'static Catalog, matcher: FuzzyMatcher, session: SessionConfig) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                catalog,
                matcher,
                session,
            }),
        }
    }

    /// Fresh dialogue state honouring the configured history bound.
    pub fn new_state(&self) -> DialogueState {
        DialogueState::with_max_history(self.inner.session.max_history)
    }

    /// Start a session with a random chooser, seeded when the configuration
    /// carries a seed.
    pub fn new_session(&self) -> Session {
        let chooser = match self.inner.session.seed {
            Some(seed) => RandomChooser::seeded(seed),
            None => RandomChooser::new(),
        };
        self.new_session_with(chooser)
    }

    /// Start a session with an explicit chooser.
    pub fn new_session_with<C>(&self, chooser: C) -> Session
    where
        C: Chooser + Send + 'static,
    {
        debug!("session started");
        Session {
            engine: self.clone(),
            state: self.new_state(),
            chooser: Box::new(chooser),
        }
    }

    /// Answer one utterance, updating `state`.
    pub fn respond(
        &self,
        state: &mut DialogueState,
        chooser: &mut dyn Chooser,
        utterance: &str,
    ) -> String {
        self.respond_detailed(state, chooser, utterance).text
    }

    /// Answer one utterance and report which stage produced the reply.
    pub fn respond_detailed(
        &self,
        state: &mut DialogueState,
        chooser: &mut dyn Chooser,
        utterance: &str,
    ) -> Reply {
        state.record_utterance(utterance);
        let turn = Turn::new(utterance);
        trace!(utterance, tokens = ?turn.tokens(), "turn started");

        for stage in TurnStage::ORDER {
            if let StageOutcome::Reply { text, intent } =
                self.run_stage(stage, &turn, state, chooser)
            {
                debug!(stage = %stage, intent = intent.unwrap_or("-"), "turn handled");
                return Reply {
                    text,
                    stage,
                    intent,
                };
            }
        }

        Reply {
            text: self.fallback_text(chooser),
            stage: TurnStage::Fallback,
            intent: None,
        }
    }

    fn run_stage(
        &self,
        stage: TurnStage,
        turn: &Turn<'_>,
        state: &mut DialogueState,
        chooser: &mut dyn Chooser,
    ) -> StageOutcome {
        match stage {
            TurnStage::IntroduceName => Self::introduce_name(turn, state),
            TurnStage::Emotion => self.emotion(turn, state, chooser),
            TurnStage::MemoryRecall => self.memory_recall(turn, state, chooser),
            TurnStage::FollowUp => self.follow_up(turn, state, chooser),
            TurnStage::IntentMatch => self.intent_match(turn, state, chooser),
            TurnStage::VagueRecall => self.vague_recall(turn, state, chooser),
            TurnStage::Fallback => StageOutcome::reply(self.fallback_text(chooser), None),
        }
    }

    // ── Stages ──────────────────────────────────────────────────────────

    fn introduce_name(turn: &Turn<'_>, state: &mut DialogueState) -> StageOutcome {
        if state.user_name().is_some() {
            return StageOutcome::Pass;
        }
        let Some(name) = extract_name(turn.raw()) else {
            return StageOutcome::Pass;
        };
        let greeting = catalog::name_greeting(&name);
        state.set_user_name(name);
        StageOutcome::reply(greeting, None)
    }

    fn emotion(
        &self,
        turn: &Turn<'_>,
        state: &mut DialogueState,
        chooser: &mut dyn Chooser,
    ) -> StageOutcome {
        let Some(phrase) = detect_emotion(turn.tokens()).phrase() else {
            return StageOutcome::Pass;
        };
        state.set_last_intent(phrase);
        StageOutcome::reply(self.render(phrase, state, chooser), Some(phrase))
    }

    fn memory_recall(
        &self,
        turn: &Turn<'_>,
        state: &DialogueState,
        chooser: &mut dyn Chooser,
    ) -> StageOutcome {
        if !turn.lower().contains(MEMORY) {
            return StageOutcome::Pass;
        }
        StageOutcome::reply(self.render(MEMORY, state, chooser), Some(MEMORY))
    }

    fn follow_up(
        &self,
        turn: &Turn<'_>,
        state: &DialogueState,
        chooser: &mut dyn Chooser,
    ) -> StageOutcome {
        match state.last_intent() {
            Some(last) if turn.is_bare_follow_up() => {
                StageOutcome::reply(self.render(last, state, chooser), Some(last))
            }
            _ => StageOutcome::Pass,
        }
    }

    fn intent_match(
        &self,
        turn: &Turn<'_>,
        state: &mut DialogueState,
        chooser: &mut dyn Chooser,
    ) -> StageOutcome {
        let Some(hit) = self.inner.matcher.match_tokens(turn.tokens()) else {
            return StageOutcome::Pass;
        };
        let Some(phrase) = self.inner.catalog.phrase(hit.phrase) else {
            warn!(phrase = hit.phrase, "matched phrase missing from catalog");
            return StageOutcome::Pass;
        };
        state.set_last_intent(phrase);
        if !catalog::is_small_talk(phrase) {
            state.add_topic(phrase);
        }
        StageOutcome::reply(self.render(phrase, state, chooser), Some(phrase))
    }

    fn vague_recall(
        &self,
        turn: &Turn<'_>,
        state: &DialogueState,
        chooser: &mut dyn Chooser,
    ) -> StageOutcome {
        if !turn.mentions_follow_up() {
            return StageOutcome::Pass;
        }
        match state.last_intent() {
            Some(last) => StageOutcome::reply(self.render(last, state, chooser), Some(last)),
            None => StageOutcome::reply(SPECIFY_REPLY, None),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, phrase: Phrase, state: &DialogueState, chooser: &mut dyn Chooser) -> String {
        match self.inner.catalog.get(phrase) {
            Some(ResponseTemplate::Literal(variants)) => chooser.pick(variants).to_owned(),
            Some(ResponseTemplate::Dynamic(generate)) => generate(),
            Some(ResponseTemplate::Formatted { variants, empty }) => {
                match state.topics_summary() {
                    Some(topics) => chooser.pick(variants).replace("{topics}", &topics),
                    None => (*empty).to_owned(),
                }
            }
            None => {
                warn!(phrase, "no template for phrase");
                self.fallback_text(chooser)
            }
        }
    }

    fn fallback_text(&self, chooser: &mut dyn Chooser) -> String {
        let default = match self.inner.catalog.get(DEFAULT) {
            Some(ResponseTemplate::Literal(variants)) => chooser.pick(variants),
            _ => "",
        };
        let suggestion = chooser.pick(SUGGESTIONS);
        if default.is_empty() {
            return suggestion.to_owned();
        }
        format!("{default} {suggestion}")
    }
}

/// One conversation: an engine handle, its state, and its chooser.
pub struct Session {
    engine: Engine,
    state: DialogueState,
    chooser: Box<dyn Chooser + Send>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Answer one utterance.
    pub fn respond(&mut self, utterance: &str) -> String {
        self.engine
            .respond(&mut self.state, self.chooser.as_mut(), utterance)
    }

    /// Answer one utterance with stage details.
    pub fn respond_detailed(&mut self, utterance: &str) -> Reply {
        self.engine
            .respond_detailed(&mut self.state, self.chooser.as_mut(), utterance)
    }

    /// Dialogue state so far.
    pub fn state(&self) -> &DialogueState {
        &self.state
    }
}
