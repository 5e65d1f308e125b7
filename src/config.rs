//! Configuration types for the responder and its terminal front-end.

use parley_match::MatchConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    /// Fuzzy matcher thresholds.
    pub matcher: MatcherConfig,
    /// Per-conversation settings.
    pub session: SessionConfig,
    /// Terminal front-end settings.
    pub cli: CliConfig,
}

/// Fuzzy matcher thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum similarity (inclusive) for whole-sentence and single-token
    /// matches.
    pub sentence_threshold: f32,
    /// Similarity a phrase word must strictly exceed against some input word
    /// for per-word coverage matches.
    pub word_threshold: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        let defaults = MatchConfig::default();
        Self {
            sentence_threshold: defaults.sentence_threshold,
            word_threshold: defaults.word_threshold,
        }
    }
}

impl From<&MatcherConfig> for MatchConfig {
    fn from(config: &MatcherConfig) -> Self {
        Self {
            sentence_threshold: config.sentence_threshold,
            word_threshold: config.word_threshold,
        }
    }
}

/// Per-conversation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of raw utterances kept in history.
    ///
    /// Oldest entries are dropped first. Set to 0 to keep everything.
    pub max_history: usize,
    /// Seed for reply selection. `None` seeds each session from OS entropy.
    pub seed: Option<u64>,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Printed once when the conversation starts.
    pub banner: String,
    /// Prompt printed before each line of input.
    pub prompt: String,
    /// Label printed before each reply.
    pub reply_label: String,
    /// Printed when the user leaves with an exit word.
    pub farewell: String,
    /// Inputs that end the conversation (matched case-insensitively after
    /// trimming).
    pub exit_words: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            banner: "Hello! I'm your smart assistant. Type 'quit' to exit.".to_owned(),
            prompt: "You: ".to_owned(),
            reply_label: "Chatbot".to_owned(),
            farewell: "Goodbye! Talk to you soon.".to_owned(),
            exit_words: vec!["quit".to_owned(), "exit".to_owned(), "bye".to_owned()],
        }
    }
}

impl CliConfig {
    /// Prefix `text` with the reply label, as every assistant line is shown.
    pub fn labelled(&self, text: &str) -> String {
        format!("{}: {text}", self.reply_label)
    }

    /// Returns `true` if `input` is one of the exit words.
    pub fn is_exit(&self, input: &str) -> bool {
        let input = input.trim();
        self.exit_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(input))
    }
}

impl ParleyConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// [`validate`](Self::validate).
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::ParleyError::Config(e.to_string()))?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot
    /// be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::ParleyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn load_or_default(path: &std::path::Path) -> crate::error::Result<Self> {
        if path.is_file() {
            return Self::from_file(path);
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(Self::default())
    }

    /// Per-user config location: `$XDG_CONFIG_HOME/parley/config.toml`, then
    /// `~/.config/parley/config.toml`, then the system temp directory.
    pub fn default_config_path() -> PathBuf {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(std::env::temp_dir)
            .join("parley")
            .join(CONFIG_FILE_NAME)
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - both matcher thresholds lie in `(0, 1]`
    /// - at least one exit word is configured, and none is blank
    ///
    /// # Errors
    ///
    /// Returns [`ParleyError::Config`](crate::error::ParleyError::Config)
    /// describing the first invalid field.
    pub fn validate(&self) -> crate::error::Result<()> {
        MatchConfig::from(&self.matcher).validate()?;
        if self.cli.exit_words.is_empty() {
            return Err(crate::error::ParleyError::Config(
                "at least one exit word must be configured".into(),
            ));
        }
        if self.cli.exit_words.iter().any(|w| w.trim().is_empty()) {
            return Err(crate::error::ParleyError::Config(
                "exit words must not be blank".into(),
            ));
        }
        Ok(())
    }
}
