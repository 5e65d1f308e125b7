//! Parley: a rule-based conversational responder.
//!
//! Each user utterance becomes exactly one reply. There is no model behind
//! it, just a fixed catalog of intent phrases, a fuzzy matcher tolerant of
//! typos and chat shorthand, and a little per-conversation memory.
//!
//! # Architecture
//!
//! A turn runs through an ordered list of stages ([`TurnStage::ORDER`]):
//! - **Name**: "my name is X" is remembered once
//! - **Emotion**: sad or happy keywords get an empathetic reply
//! - **Memory**: "what did we talk about" lists the topics so far
//! - **Follow-up**: "tell me more" repeats the last intent
//! - **Intent match**: fuzzy matching via [`parley_match`]
//! - **Fallback**: a default reply plus a suggestion
//!
//! The [`Engine`] is immutable and shared; each conversation owns its
//! [`DialogueState`], usually through a [`Session`].

pub mod catalog;
pub mod chooser;
pub mod config;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod name;
pub mod state;
pub mod turn;

pub use catalog::{Catalog, Phrase, ResponseTemplate};
pub use chooser::{Chooser, FixedChooser, RandomChooser};
pub use config::ParleyConfig;
pub use emotion::{Emotion, detect_emotion};
pub use engine::{Engine, Session};
pub use error::{ParleyError, Result};
pub use name::extract_name;
pub use state::DialogueState;
pub use turn::{Reply, TurnStage};
