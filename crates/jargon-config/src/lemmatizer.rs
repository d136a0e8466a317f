use serde::{Deserialize, Serialize};

fn default_max_gram_length() -> usize {
    3
}

fn default_numbers() -> bool {
    true
}

fn default_contractions() -> bool {
    false
}

fn default_ascii_fold() -> bool {
    false
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LemmatizerConfig {
    /// Longest word run handed to a term dictionary
    #[serde(default = "default_max_gram_length")]
    pub max_gram_length: usize,
    /// Rewrite cardinal phrases such as "three hundred"
    #[serde(default = "default_numbers")]
    pub numbers: bool,
    /// Expand contractions such as "don't"
    #[serde(default = "default_contractions")]
    pub contractions: bool,
    /// Fold accented words to ASCII, "naïve" → "naive"
    #[serde(default = "default_ascii_fold")]
    pub ascii_fold: bool,
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self {
            max_gram_length: default_max_gram_length(),
            numbers: default_numbers(),
            contractions: default_contractions(),
            ascii_fold: default_ascii_fold(),
        }
    }
}
