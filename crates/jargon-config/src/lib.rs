use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::html::HtmlConfig;
use self::lemmatizer::LemmatizerConfig;

pub mod dictionary;
pub mod html;
pub mod lemmatizer;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub lemmatizer: LemmatizerConfig,
    pub dictionary: DictionaryConfig,
    pub html: HtmlConfig,
}

impl Config {
    /// Defaults, overridden by `JARGON_*` environment variables
    pub fn new() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Apply overrides from a key lookup. Unparsable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(n) = lookup("JARGON_MAX_GRAM_LENGTH").and_then(|v| v.parse().ok()) {
            self.lemmatizer.max_gram_length = n;
        }

        if let Some(enabled) = lookup("JARGON_NUMBERS").and_then(|v| v.parse().ok()) {
            self.lemmatizer.numbers = enabled;
        }

        if let Some(enabled) = lookup("JARGON_CONTRACTIONS").and_then(|v| v.parse().ok()) {
            self.lemmatizer.contractions = enabled;
        }

        if let Some(enabled) = lookup("JARGON_ASCII_FOLD").and_then(|v| v.parse().ok()) {
            self.lemmatizer.ascii_fold = enabled;
        }

        if let Some(paths) = lookup("JARGON_DICTIONARY_PATHS") {
            self.dictionary.paths = env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.display().to_string())
                .collect();
        }

        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
