//! Text normalisation: lower-casing, word tokenisation and abbreviation
//! expansion.
//!
//! Expansions replace a token in place and are **not** re-split, so `"im"`
//! becomes the single token `"i am"`. The joined sentence is the same either
//! way; the token count is not, which matters for per-word matching.

/// A normalised word: lower-case, possibly an abbreviation expansion.
pub type Token = String;

/// Chat shorthand and its expansion.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("u", "you"),
    ("r", "are"),
    ("im", "i am"),
    ("idk", "i don't know"),
    ("pls", "please"),
    ("thx", "thanks"),
    ("ty", "thank you"),
    ("cuz", "because"),
    ("msg", "message"),
    ("b4", "before"),
    ("gr8", "great"),
    ("btw", "by the way"),
    ("asap", "as soon as possible"),
];

/// Normalise free text into a token sequence.
///
/// Lower-cases the input, splits it into maximal runs of word characters
/// (alphanumerics and `_`) and expands known abbreviations. Empty or
/// punctuation-only input yields an empty vector.
pub fn normalize(text: &str) -> Vec<Token> {
    let lower = text.to_lowercase();
    let tokens: Vec<Token> = tokenize(&lower)
        .map(|word| expand_abbreviation(word).to_owned())
        .collect();
    tracing::trace!(?tokens, "normalised input");
    tokens
}

/// Split text into word tokens without changing case.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}

/// Returns the expansion for a known abbreviation, or the token unchanged.
pub fn expand_abbreviation(token: &str) -> &str {
    ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == token)
        .map_or(token, |&(_, long)| long)
}

/// Word characters are Unicode alphanumerics plus underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
