#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the normalise → match pipeline over a realistic
//! chat phrase list.

use parley_match::{FuzzyMatcher, MatchStage, classify, normalize};

/// Phrase list in declaration order; the matcher re-sorts it longest first.
const PHRASES: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "how are you",
    "who are you",
    "what can you do",
    "what is ai",
    "machine learning",
    "cloud computing",
    "teach me",
    "give advice",
    "current time",
    "current date",
    "help",
    "troubleshooting",
    "thank you",
    "bye",
    "i am sad",
    "i am happy",
    "great",
    "fine",
    "joke",
    "name",
    "default",
    "what did we talk about",
];

fn matcher() -> FuzzyMatcher {
    FuzzyMatcher::new(PHRASES.iter().copied())
}

#[test]
fn priority_order_is_length_descending_and_stable() {
    let m = matcher();
    let order: Vec<&str> = m.phrases().collect();
    assert_eq!(order.first().copied(), Some("what did we talk about"));
    assert_eq!(order.last().copied(), Some("hi"));
    assert!(
        order
            .windows(2)
            .all(|w| w[0].chars().count() >= w[1].chars().count())
    );
    // Equal-length phrases keep declaration order.
    let pos = |p: &str| order.iter().position(|o| *o == p).expect("phrase present");
    assert!(pos("what can you do") < pos("cloud computing"));
    assert!(pos("cloud computing") < pos("troubleshooting"));
    assert!(pos("help") < pos("fine"));
    assert!(pos("fine") < pos("joke"));
}

#[test]
fn every_phrase_matches_itself_at_stage_one() {
    let m = matcher();
    for phrase in PHRASES {
        let hit = m.match_tokens(normalize(phrase)).expect("self match");
        assert_eq!(hit.phrase, *phrase);
        assert_eq!(hit.stage, MatchStage::WholeSentence);
        assert_eq!(hit.score, 1.0, "{phrase}");
    }
}

#[test]
fn shorthand_question_resolves_to_how_are_you() {
    let m = matcher();
    assert_eq!(normalize("hw r u"), vec!["hw", "are", "you"]);
    let hit = classify(&m, "hw r u").expect("match");
    assert_eq!(hit.phrase, "how are you");
    assert_eq!(hit.stage, MatchStage::WholeSentence);
}

#[test]
fn typos_resolve_at_stage_one() {
    let m = matcher();
    assert_eq!(classify(&m, "machne lerning").map(|h| h.phrase), Some("machine learning"));
    assert_eq!(classify(&m, "who r u").map(|h| h.phrase), Some("who are you"));
    assert_eq!(classify(&m, "what can u do").map(|h| h.phrase), Some("what can you do"));
}

#[test]
fn extra_words_still_reach_stage_one() {
    let m = matcher();
    assert_eq!(
        classify(&m, "What is machine learning?").map(|h| h.phrase),
        Some("machine learning")
    );
    assert_eq!(
        classify(&m, "give me some advice").map(|h| h.phrase),
        Some("give advice")
    );
    assert_eq!(
        classify(&m, "thank you so much").map(|h| h.phrase),
        Some("thank you")
    );
}

#[test]
fn long_sentence_falls_to_word_coverage() {
    let m = matcher();
    let hit = classify(&m, "please tell me about cloud computing today").expect("match");
    assert_eq!(hit.phrase, "cloud computing");
    assert_eq!(hit.stage, MatchStage::WordCoverage);
}

#[test]
fn coincidental_word_overlap_is_claimed_by_coverage() {
    // "tell" is close enough to "hello" for per-word coverage; the responder
    // handles bare follow-ups before the matcher runs for this reason.
    let m = matcher();
    let hit = classify(&m, "tell me more").expect("match");
    assert_eq!(hit.phrase, "hello");
    assert_eq!(hit.stage, MatchStage::WordCoverage);
}

#[test]
fn thanks_abbreviation_maps_to_thank_you() {
    let m = matcher();
    assert_eq!(classify(&m, "thx").map(|h| h.phrase), Some("thank you"));
    assert_eq!(classify(&m, "ty").map(|h| h.phrase), Some("thank you"));
}

#[test]
fn unmatched_inputs_return_none() {
    let m = matcher();
    for input in ["", "!!!", "   ", "asdfghjkl", "zzz qqq", "like what", "can you explain", "how"] {
        assert!(classify(&m, input).is_none(), "expected no match for {input:?}");
    }
}

#[test]
fn matcher_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FuzzyMatcher>();

    let m = std::sync::Arc::new(matcher());
    let handles: Vec<_> = ["hello", "bye", "joke"]
        .into_iter()
        .map(|input| {
            let m = std::sync::Arc::clone(&m);
            std::thread::spawn(move || classify(&m, input).map(|h| h.phrase.to_owned()))
        })
        .collect();
    let results: Vec<Option<String>> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();
    assert_eq!(
        results,
        vec![
            Some("hello".to_owned()),
            Some("bye".to_owned()),
            Some("joke".to_owned())
        ]
    );
}
