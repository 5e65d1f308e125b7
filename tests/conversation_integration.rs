#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Conversation Integration Tests
//!
//! Drive full multi-turn conversations through the public API and check the
//! replies and the dialogue state left behind.

use parley::catalog::{Catalog, ResponseTemplate};
use parley::{Engine, FixedChooser, ParleyConfig, RandomChooser, Session, TurnStage};

fn session() -> Session {
    Engine::initialize().new_session_with(FixedChooser(0))
}

fn literal_variants(phrase: &str) -> &'static [&'static str] {
    match Catalog::builtin().get(phrase) {
        Some(ResponseTemplate::Literal(variants)) => variants,
        other => panic!("expected literal template for {phrase}, got {other:?}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Name handling
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_name_greeting_capitalizes_and_locks() {
    let mut s = session();
    let reply = s.respond("my name is david");
    assert!(reply.contains("David"), "{reply}");
    assert_eq!(s.state().user_name(), Some("David"));

    s.respond("my name is goliath");
    assert_eq!(s.state().user_name(), Some("David"));
}

#[test]
fn test_name_query_asks_for_name() {
    let mut s = session();
    let reply = s.respond_detailed("name");
    assert_eq!(reply.stage, TurnStage::IntentMatch);
    assert!(literal_variants("name").contains(&reply.text.as_str()));
}

// ────────────────────────────────────────────────────────────────────────────
// Emotion
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sad_input_gets_sad_reply_with_any_chooser() {
    let sad = literal_variants("i am sad");
    let engine = Engine::initialize();
    for seed in 0..20 {
        let mut s = engine.new_session_with(RandomChooser::seeded(seed));
        let reply = s.respond("I am feeling really down");
        assert!(sad.contains(&reply.as_str()), "{reply}");
        assert_eq!(s.state().last_intent(), Some("i am sad"));
    }
}

#[test]
fn test_sad_beats_happy() {
    let mut s = session();
    let reply = s.respond_detailed("happy birthday but I'm sad");
    assert_eq!(reply.intent, Some("i am sad"));
}

// ────────────────────────────────────────────────────────────────────────────
// Topics and memory
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_memory_recall_lists_topics_in_sorted_order() {
    let engine = Engine::initialize();
    for seed in 0..5 {
        let mut s = engine.new_session_with(RandomChooser::seeded(seed));
        s.respond("teach me");
        s.respond("machine learning");
        let reply = s.respond("what did we talk about");
        assert!(reply.contains("machine learning, teach me"), "{reply}");
    }
}

#[test]
fn test_memory_recall_does_not_add_a_topic() {
    let mut s = session();
    s.respond("joke");
    s.respond("what did we talk about");
    s.respond("what did we talk about");
    assert_eq!(s.state().topics_summary().as_deref(), Some("joke"));
    assert_eq!(s.state().last_intent(), Some("joke"));
}

#[test]
fn test_typo_topics_are_remembered_by_catalog_name() {
    let mut s = session();
    s.respond("machne lerning");
    s.respond("cloud computng");
    let reply = s.respond("What did we talk about?");
    assert!(reply.contains("cloud computing, machine learning"), "{reply}");
}

// ────────────────────────────────────────────────────────────────────────────
// Follow-ups
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tell_me_more_after_joke_repeats_joke() {
    let jokes = literal_variants("joke");
    let engine = Engine::initialize();
    for seed in 0..10 {
        let mut s = engine.new_session_with(RandomChooser::seeded(seed));
        s.respond("joke");
        let reply = s.respond_detailed("tell me more");
        assert_eq!(reply.stage, TurnStage::FollowUp);
        assert!(jokes.contains(&reply.text.as_str()), "{}", reply.text);
    }
}

#[test]
fn test_why_recalls_last_intent() {
    let mut s = session();
    s.respond("what is ai");
    let reply = s.respond_detailed("why?");
    assert_eq!(reply.stage, TurnStage::FollowUp);
    assert_eq!(reply.intent, Some("what is ai"));
}

#[test]
fn test_follow_up_with_nothing_to_follow() {
    let mut s = session();
    let reply = s.respond("like what");
    assert_eq!(
        reply,
        "Could you please specify what you'd like me to explain?"
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Matching through the engine
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shorthand_how_are_you() {
    let mut s = session();
    let reply = s.respond_detailed("hw r u");
    assert_eq!(reply.intent, Some("how are you"));
    assert_eq!(
        reply.text,
        "I'm doing well, thanks for asking! How about you?"
    );
}

#[test]
fn test_every_catalog_phrase_answers_itself() {
    let engine = Engine::initialize();
    for phrase in Catalog::builtin().phrases() {
        let mut s = engine.new_session_with(FixedChooser(0));
        let reply = s.respond_detailed(phrase);
        assert!(!reply.text.is_empty(), "{phrase}");
        assert!(reply.intent.is_some(), "{phrase}");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Robustness
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_input_twice_falls_back_without_state_change() {
    let defaults = literal_variants("default");
    let mut s = Engine::initialize().new_session_with(RandomChooser::seeded(9));
    for _ in 0..2 {
        let reply = s.respond_detailed("");
        assert_eq!(reply.stage, TurnStage::Fallback);
        assert!(
            defaults.iter().any(|d| reply.text.starts_with(d)),
            "{}",
            reply.text
        );
    }
    assert!(s.state().user_name().is_none());
    assert!(s.state().topics_summary().is_none());
    assert_eq!(s.state().history_len(), 2);
}

#[test]
fn test_every_reply_is_non_empty() {
    let inputs = [
        "",
        "   ",
        "!!!",
        "hello",
        "my name is",
        "My name is Zoë",
        "what did we talk about",
        "gr8",
        "idk",
        "thx",
        "so how does it work",
        "🙂🙂🙂",
        "a very long sentence that has nothing at all to do with anything we know",
    ];
    let engine = Engine::initialize();
    for seed in 0..3 {
        let mut s = engine.new_session_with(RandomChooser::seeded(seed));
        for input in inputs {
            assert!(!s.respond(input).is_empty(), "empty reply for {input:?}");
        }
    }
}

#[test]
fn test_sessions_are_independent() {
    let engine = Engine::initialize();
    let mut a = engine.new_session_with(FixedChooser(0));
    let mut b = engine.new_session_with(FixedChooser(0));
    a.respond("my name is ann");
    a.respond("teach me");
    assert!(b.state().user_name().is_none());
    assert_eq!(
        b.respond("what did we talk about"),
        "We haven't talked about much yet. What would you like to discuss?"
    );
}

#[test]
fn test_sessions_on_separate_threads_share_one_engine() {
    let engine = Engine::initialize();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let mut s = engine.new_session_with(FixedChooser(i));
                s.respond("machine learning");
                s.respond("what did we talk about")
            })
        })
        .collect();
    for handle in handles {
        let reply = handle.join().unwrap();
        assert!(reply.contains("machine learning"), "{reply}");
    }
}

#[test]
fn test_config_file_drives_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[session]\nmax_history = 1\nseed = 5\n").unwrap();

    let config = ParleyConfig::from_file(&path).unwrap();
    let engine = Engine::with_config(&config).unwrap();
    let mut s = engine.new_session();
    s.respond("hello");
    s.respond("bye");
    let history: Vec<&str> = s.state().history().collect();
    assert_eq!(history, vec!["bye"]);
}
