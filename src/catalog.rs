//! Phrase catalog: every recognised intent phrase and its reply template.
//!
//! The catalog is built once per process ([`Catalog::builtin`]) and never
//! changes. Phrases are the matcher's vocabulary; the matcher re-sorts them
//! longest first, so the declaration order below only breaks ties between
//! phrases of equal length.

use std::sync::LazyLock;

/// An intent phrase, e.g. `"how are you"`.
pub type Phrase = &'static str;

/// Greeting phrase key.
pub const HELLO: Phrase = "hello";
/// Name query phrase; replies ask the user for their name.
pub const NAME: Phrase = "name";
/// Fallback replies when nothing matched.
pub const DEFAULT: Phrase = "default";
/// Conversation-memory query.
pub const MEMORY: Phrase = "what did we talk about";
/// Emotion pseudo-phrase for sad input.
pub const SAD: Phrase = "i am sad";
/// Emotion pseudo-phrase for happy input.
pub const HAPPY: Phrase = "i am happy";

/// Small-talk phrases that never count as a discussed topic.
pub const SMALL_TALK: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "bye",
    "thank you",
    "thanks",
    "default",
    "help",
];

/// Substrings that ask to continue the previous topic.
pub const VAGUE_TRIGGERS: &[&str] = &["how", "why", "tell me more", "like what", "can you explain"];

/// Appended to a fallback reply to steer the user somewhere useful.
pub const SUGGESTIONS: &[&str] = &[
    "Try asking about AI, machine learning, or just say 'teach me'.",
    "You can ask for advice or the current time.",
    "If you want, I can tell you a joke or a fun fact.",
];

/// Reply when a follow-up arrives with nothing to follow up on.
pub const SPECIFY_REPLY: &str = "Could you please specify what you'd like me to explain?";

/// Greeting sent when the user introduces themselves.
pub fn name_greeting(name: &str) -> String {
    format!("Nice to meet you, {name}! How can I assist you today?")
}

/// How a phrase turns into reply text.
#[derive(Debug, Clone, Copy)]
pub enum ResponseTemplate {
    /// Fixed variants; one is chosen at random.
    Literal(&'static [&'static str]),
    /// Generated on every use (e.g. the current time).
    Dynamic(fn() -> String),
    /// Variants with a `{topics}` placeholder filled from dialogue state,
    /// plus the reply used when there is nothing to fill in.
    Formatted {
        /// Variants containing `{topics}`.
        variants: &'static [&'static str],
        /// Reply used when no topics have been discussed.
        empty: &'static str,
    },
}

/// One catalog row.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Intent phrase.
    pub phrase: Phrase,
    /// Reply template for the phrase.
    pub template: ResponseTemplate,
}

const fn literal(phrase: Phrase, variants: &'static [&'static str]) -> CatalogEntry {
    CatalogEntry {
        phrase,
        template: ResponseTemplate::Literal(variants),
    }
}

// ── Built-in table ──────────────────────────────────────────────────────

const ENTRIES: &[CatalogEntry] = &[
    literal(
        HELLO,
        &["Hi there!", "Hello!", "Hey! How can I help you today?"],
    ),
    literal(
        "hi",
        &["Hi!", "Hello!", "Hey there! What can I do for you?"],
    ),
    literal("hey", &["Hey!", "Hi! What can I do for you?"]),
    literal(
        "how are you",
        &["I'm doing well, thanks for asking! How about you?"],
    ),
    literal(
        "who are you",
        &["I'm your smart assistant. Ask me anything!"],
    ),
    literal(
        "what can you do",
        &["I can chat, give facts, offer advice, and help you with tech trouble!"],
    ),
    literal(
        "what is ai",
        &["AI stands for Artificial Intelligence. It's like teaching computers to think."],
    ),
    literal(
        "machine learning",
        &["ML is part of AI where computers learn patterns from data."],
    ),
    literal(
        "cloud computing",
        &["Storing and accessing data via the internet, like Google Drive."],
    ),
    literal(
        "teach me",
        &[
            "Did you know? Honey never spoils.",
            "Fun fact: Bananas are berries, strawberries aren't!",
        ],
    ),
    literal(
        "give advice",
        &[
            "Keep learning and never stop exploring.",
            "Take breaks and stay healthy!",
        ],
    ),
    CatalogEntry {
        phrase: "current time",
        template: ResponseTemplate::Dynamic(current_time),
    },
    CatalogEntry {
        phrase: "current date",
        template: ResponseTemplate::Dynamic(current_date),
    },
    literal(
        "help",
        &["I'm here to assist. What seems to be the problem?"],
    ),
    literal(
        "troubleshooting",
        &["Try restarting the app. Still not working? Let me know more details."],
    ),
    literal("thank you", &["You're welcome!", "Glad to help!"]),
    literal("bye", &["Goodbye!", "See you later!", "Take care!"]),
    literal(
        SAD,
        &[
            "I'm sorry you're feeling that way. Want to talk about it?",
            "It's okay to feel sad sometimes. I'm here with you.",
            "Want to hear a fun fact or joke to cheer up?",
        ],
    ),
    literal(
        HAPPY,
        &[
            "Yay! I love hearing that!",
            "Happiness is contagious, thanks for sharing!",
        ],
    ),
    literal(
        "great",
        &[
            "That's awesome to hear! What's making your day great?",
            "Glad you're feeling great! Anything exciting going on?",
            "Great! Let me know if you want to learn something new today.",
        ],
    ),
    literal(
        "fine",
        &[
            "Alright, I'm here if you want to talk or learn something new.",
            "Good to hear you're fine. What would you like to do next?",
        ],
    ),
    literal(
        "joke",
        &[
            "Why don't scientists trust atoms? Because they make up everything!",
            "I told my computer I needed a break, and it said 'No problem, I'll go to sleep.'",
        ],
    ),
    literal(
        NAME,
        &[
            "I don't think I know your name yet! What should I call you?",
            "I'd love to know your name! What's your name?",
        ],
    ),
    literal(
        DEFAULT,
        &[
            "I'm not sure I understand. Can you rephrase or ask something else?",
            "Sorry, I didn't get that. Maybe try asking about AI, machine learning, or just say 'teach me'.",
            "Can you tell me more or ask a different question?",
        ],
    ),
    CatalogEntry {
        phrase: MEMORY,
        template: ResponseTemplate::Formatted {
            variants: &[
                "I remember we talked about {topics}.",
                "Earlier, you mentioned {topics}.",
            ],
            empty: "We haven't talked about much yet. What would you like to discuss?",
        },
    },
];

fn current_time() -> String {
    format!(
        "The current time is {}",
        chrono::Local::now().format("%H:%M:%S")
    )
}

fn current_date() -> String {
    format!(
        "Today's date is {}",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    entries: ENTRIES.to_vec(),
});

/// Immutable phrase → template table.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Template for `phrase`, if the phrase is known.
    pub fn get(&self, phrase: &str) -> Option<&ResponseTemplate> {
        self.entries
            .iter()
            .find(|entry| entry.phrase == phrase)
            .map(|entry| &entry.template)
    }

    /// The catalog's own key for `phrase`, if the phrase is known.
    pub fn phrase(&self, phrase: &str) -> Option<Phrase> {
        self.entries
            .iter()
            .find(|entry| entry.phrase == phrase)
            .map(|entry| entry.phrase)
    }

    /// All phrases in declaration order.
    pub fn phrases(&self) -> impl Iterator<Item = Phrase> + '_ {
        self.entries.iter().map(|entry| entry.phrase)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `true` if `phrase` is small talk and should not be remembered as
/// a topic.
pub fn is_small_talk(phrase: &str) -> bool {
    SMALL_TALK.contains(&phrase)
}
