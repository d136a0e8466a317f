use std::collections::HashMap;

use jargon_core::Dictionary;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Deserialize)]
struct TermDictionaryJson {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    synonyms: HashMap<String, String>,
}

/// Technical terms and their synonyms, e.g. "Ruby on Rails" → "ruby-on-rails".
///
/// Keys are [`normalize`]d, so a run of words matches a term when the words
/// joined without separators normalize to the same key.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    tags: HashMap<String, String>,
    synonyms: HashMap<String, String>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a `{"tags": [...], "synonyms": {variant: canonical}}` document
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: TermDictionaryJson = serde_json::from_str(json_str)?;
        Self::from_parsed(data)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, LoadError> {
        let data: TermDictionaryJson = serde_json::from_reader(reader)?;
        Self::from_parsed(data)
    }

    fn from_parsed(data: TermDictionaryJson) -> Result<Self, LoadError> {
        if let Some(tag) = data.tags.iter().find(|t| normalize(t).is_empty()) {
            return Err(LoadError::InvalidFormat(format!("empty tag {tag:?}")));
        }
        if let Some((variant, _)) = data
            .synonyms
            .iter()
            .find(|(v, canonical)| normalize(v).is_empty() || canonical.is_empty())
        {
            return Err(LoadError::InvalidFormat(format!(
                "empty synonym entry for {variant:?}"
            )));
        }

        Ok(Self::from_pairs(
            data.tags.iter().map(String::as_str),
            data.synonyms.iter().map(|(v, c)| (v.as_str(), c.as_str())),
        ))
    }

    pub fn from_pairs<'a>(
        tags: impl IntoIterator<Item = &'a str>,
        synonyms: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| (normalize(tag), tag.to_string()))
                .collect(),
            synonyms: synonyms
                .into_iter()
                .map(|(variant, canonical)| (normalize(variant), canonical.to_string()))
                .collect(),
        }
    }

    /// Tags plus synonyms
    pub fn entry_count(&self) -> usize {
        self.tags.len() + self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Merge another dictionary into this one; its entries win on equal keys
    pub fn merge(mut self, other: TermDictionary) -> Self {
        self.tags.extend(other.tags);
        self.synonyms.extend(other.synonyms);
        self
    }
}

impl Dictionary for TermDictionary {
    fn lookup(&self, words: &[String]) -> Option<String> {
        let key = normalize(&words.concat());
        self.tags
            .get(&key)
            .or_else(|| self.synonyms.get(&key))
            .cloned()
    }
}

/// Lookup key for a term: NFKC, then `.`, `-` and `/` removed except in the
/// first position (".net" keeps its dot), then lowercased.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.nfkc().enumerate() {
        if i > 0 && matches!(c, '.' | '-' | '/') {
            continue;
        }
        out.push(c);
    }
    out.to_lowercase()
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMS: &str = r#"{
        "tags": ["ruby-on-rails", "node.js", ".net"],
        "synonyms": {"rails": "ruby-on-rails", "nodejs-runtime": "node.js"}
    }"#;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize("foo.js"), "foojs");
        assert_eq!(normalize(".Net"), ".net");
        assert_eq!(normalize("ASP.net-mvc"), "aspnetmvc");
        assert_eq!(normalize("os/2"), "os2");
        // fullwidth forms fold under NFKC
        assert_eq!(normalize("ＮＯＤＥ.js"), "nodejs");
    }

    #[test]
    fn tags_and_synonyms() {
        let dict = TermDictionary::from_json(TERMS).unwrap();
        assert_eq!(dict.entry_count(), 5);

        assert_eq!(dict.lookup(&words("Ruby on Rails")).as_deref(), Some("ruby-on-rails"));
        assert_eq!(dict.lookup(&words("NodeJS")).as_deref(), Some("node.js"));
        assert_eq!(dict.lookup(&words(".NET")).as_deref(), Some(".net"));
        assert_eq!(dict.lookup(&words("Rails")).as_deref(), Some("ruby-on-rails"));
        assert_eq!(dict.lookup(&words("nodejs runtime")).as_deref(), Some("node.js"));
        assert_eq!(dict.lookup(&words("net")), None);
        assert_eq!(dict.lookup(&words("ruby")), None);
    }

    #[test]
    fn tags_win_over_synonyms() {
        let dict = TermDictionary::from_pairs(["java"], [("java", "jvm")]);
        assert_eq!(dict.lookup(&words("Java")).as_deref(), Some("java"));
    }

    #[test]
    fn merge_overrides() {
        let base = TermDictionary::from_pairs(["javascript"], [("js", "javascript")]);
        let extra = TermDictionary::from_pairs(["go"], [("js", "ecmascript")]);

        let merged = base.merge(extra);
        assert_eq!(merged.entry_count(), 3);
        assert_eq!(merged.lookup(&words("JS")).as_deref(), Some("ecmascript"));
        assert_eq!(merged.lookup(&words("Go")).as_deref(), Some("go"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dict = TermDictionary::from_json(r#"{"tags": ["rust"]}"#).unwrap();
        assert_eq!(dict.entry_count(), 1);
        assert!(TermDictionary::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            TermDictionary::from_json("[1, 2"),
            Err(LoadError::ParseError(_))
        ));
        assert!(matches!(
            TermDictionary::from_json(r#"{"tags": [""]}"#),
            Err(LoadError::InvalidFormat(_))
        ));
        assert!(matches!(
            TermDictionary::from_json(r#"{"synonyms": {"x": ""}}"#),
            Err(LoadError::InvalidFormat(_))
        ));
    }
}
