use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use jargon_config::Config;
use jargon_config::html::HtmlConfig;
use jargon_core::{Lemmatizer, Token, TokensExt, tokenize};
use jargon_html::HtmlTokens;

use crate::ascii::AsciiFoldDictionary;
use crate::contractions::ContractionDictionary;
use crate::dictionary::TermDictionary;
use crate::loader::TermDictionaryLoader;
use crate::numbers::NumberDictionary;

/// English lemmatization pipeline: ASCII folding, contractions, terms, then numbers
pub struct EnglishProcessor {
    ascii_fold: Option<Lemmatizer<AsciiFoldDictionary>>,
    contractions: Option<Lemmatizer<Arc<ContractionDictionary>>>,
    terms: Option<Lemmatizer<Arc<TermDictionary>>>,
    numbers: Option<Lemmatizer<NumberDictionary>>,
    max_gram_length: usize,
    html: HtmlConfig,
}

impl EnglishProcessor {
    /// Defaults with environment overrides
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(&Config::new())
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let settings = &config.lemmatizer;

        let numbers = if settings.numbers {
            Some(
                Lemmatizer::from_config(NumberDictionary, settings)
                    .context("Invalid number lemmatizer settings")?,
            )
        } else {
            None
        };

        let contractions = if settings.contractions {
            Some(
                Lemmatizer::new(
                    Arc::new(ContractionDictionary::new()),
                    ContractionDictionary::MAX_GRAM_LENGTH,
                )
                .context("Invalid contraction lemmatizer settings")?,
            )
        } else {
            None
        };

        let ascii_fold = if settings.ascii_fold {
            Some(
                Lemmatizer::new(AsciiFoldDictionary, AsciiFoldDictionary::MAX_GRAM_LENGTH)
                    .context("Invalid ASCII fold lemmatizer settings")?,
            )
        } else {
            None
        };

        let mut processor = Self {
            ascii_fold,
            contractions,
            terms: None,
            numbers,
            max_gram_length: settings.max_gram_length,
            html: config.html.clone(),
        };

        if config.dictionary.enabled {
            let terms = Self::load_terms(&config.dictionary.paths);
            if !terms.is_empty() {
                processor = processor.with_terms(terms)?;
            }
        }

        tracing::debug!(
            "English processor ready: ascii_fold={}, contractions={}, terms={}, numbers={}",
            processor.ascii_fold.is_some(),
            processor.contractions.is_some(),
            processor.terms.is_some(),
            processor.numbers.is_some()
        );
        Ok(processor)
    }

    /// Use `terms` as the term dictionary, replacing any loaded from config
    pub fn with_terms(mut self, terms: TermDictionary) -> anyhow::Result<Self> {
        let lemmatizer = Lemmatizer::new(Arc::new(terms), self.max_gram_length)
            .context("Invalid term lemmatizer settings")?;
        self.terms = Some(lemmatizer);
        Ok(self)
    }

    fn load_terms(paths: &[String]) -> TermDictionary {
        let mut terms = TermDictionary::new();

        for path in paths {
            match TermDictionaryLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging term dictionary from: {}", path);
                    terms = TermDictionaryLoader::merge(terms, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load term dictionary from {}: {}", path, e);
                }
            }
        }

        terms
    }

    pub fn terms(&self) -> Option<&TermDictionary> {
        self.terms.as_ref().map(|l| &**l.dictionary())
    }

    pub fn lemmatize<'a, I>(&self, tokens: I) -> Box<dyn Iterator<Item = Token> + 'a>
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'a,
    {
        let mut stream: Box<dyn Iterator<Item = Token> + 'a> = Box::new(tokens.into_iter());

        if let Some(lemmatizer) = &self.ascii_fold {
            stream = Box::new(stream.lemmatize(lemmatizer.clone()));
        }
        if let Some(lemmatizer) = &self.contractions {
            stream = Box::new(stream.lemmatize(lemmatizer.clone()));
        }
        if let Some(lemmatizer) = &self.terms {
            stream = Box::new(stream.lemmatize(lemmatizer.clone()));
        }
        if let Some(lemmatizer) = &self.numbers {
            stream = Box::new(stream.lemmatize(lemmatizer.clone()));
        }

        stream
    }

    pub fn lemmatize_str(&self, text: &str) -> String {
        self.lemmatize(tokenize(text)).into_text()
    }

    /// Lemmatize the text of an HTML document; markup passes through
    pub fn lemmatize_html(&self, html: &str) -> String {
        let tokens = HtmlTokens::with_config(html.as_bytes(), self.html.clone());
        self.lemmatize(tokens).into_text()
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use jargon_config::dictionary::DictionaryConfig;
    use jargon_config::lemmatizer::LemmatizerConfig;
    use tracing_subscriber::EnvFilter;

    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    const TERMS: &str = r#"{
        "tags": ["ruby-on-rails", "node.js", "javascript", "html5", "asp.net-mvc", "tcpip"],
        "synonyms": {"rails": "ruby-on-rails", "aspnet": "asp.net", "mvc": "model-view-controller"}
    }"#;

    fn config(numbers: bool, contractions: bool) -> Config {
        Config {
            lemmatizer: LemmatizerConfig {
                max_gram_length: 3,
                numbers,
                contractions,
                ascii_fold: false,
            },
            dictionary: DictionaryConfig::default(),
            html: HtmlConfig::default(),
        }
    }

    fn processor(numbers: bool, contractions: bool) -> EnglishProcessor {
        EnglishProcessor::from_config(&config(numbers, contractions))
            .unwrap()
            .with_terms(TermDictionary::from_json(TERMS).unwrap())
            .unwrap()
    }

    /// Lemmatize `original` and compare against tokenizing `expected`
    fn assert_lemmatizes(processor: &EnglishProcessor, original: &str, expected: &str) {
        let got: Vec<String> = processor
            .lemmatize(tokenize(original))
            .map(|t| t.text().to_string())
            .collect();
        let want: Vec<String> = tokenize(expected).map(|t| t.text().to_string()).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn lemmatize_prose() {
        let processor = processor(false, false);
        let original = "Here is the story of Ruby on Rails nodeJS, \"Java Script\", html5 and ASPNET mvc plus TCP/IP.";
        let expected = "Here is the story of ruby-on-rails node.js, \"javascript\", html5 and asp.net-mvc plus tcpip.";
        assert_lemmatizes(&processor, original, expected);

        let lemmas: Vec<String> = processor
            .lemmatize(tokenize(original))
            .lemmas()
            .map(|t| t.text().to_string())
            .collect();
        assert_eq!(
            lemmas,
            vec!["ruby-on-rails", "node.js", "javascript", "html5", "asp.net-mvc", "tcpip"]
        );
    }

    #[test]
    fn lemmatize_csv() {
        let processor = processor(false, false);
        assert_lemmatizes(
            &processor,
            "\"Ruby on Rails\", 3.4, \"foo\"\n\"bar\",42, \"java script\"",
            "\"ruby-on-rails\", 3.4, \"foo\"\n\"bar\",42, \"javascript\"",
        );
    }

    #[test]
    fn lemmatize_tsv() {
        // tabs separate columns, so words either side of one are looked up apart
        let processor = processor(false, false);
        assert_lemmatizes(
            &processor,
            "Ruby on Rails\t3.4\tfoo\nASPNET\tMVC\nbar\t42\tjava script",
            "ruby-on-rails\t3.4\tfoo\nasp.net\tmodel-view-controller\nbar\t42\tjavascript",
        );
    }

    #[test]
    fn stages_apply_in_order() {
        init_tracing();
        let processor = processor(true, true);
        assert_eq!(
            processor.lemmatize_str("I'm sure we're using Rails for three hundred sites."),
            "I am sure we are using ruby-on-rails for 300 sites."
        );
    }

    #[test]
    fn ascii_fold_runs_before_terms() {
        let mut config = config(false, true);
        config.lemmatizer.ascii_fold = true;
        let processor = EnglishProcessor::from_config(&config)
            .unwrap()
            .with_terms(TermDictionary::from_pairs(["nodejs", "cafe"], std::iter::empty()))
            .unwrap();

        // folded "Café" matches the ASCII tag, curly "Don’t" still expands
        assert_eq!(
            processor.lemmatize_str("Don’t skip the Café or Nöde.js"),
            "Do not skip the cafe or nodejs"
        );
    }

    #[test]
    fn disabled_stages_leave_text_alone() {
        let processor = EnglishProcessor::from_config(&config(false, false)).unwrap();
        assert!(processor.terms().is_none());

        let text = "I'm using Rails for three hundred sites.";
        assert_eq!(processor.lemmatize_str(text), text);
    }

    #[test]
    fn html_markup_passes_through() {
        let processor = processor(true, false);
        assert_eq!(
            processor.lemmatize_html(
                "<p class=\"x\">Ruby on Rails, two thousand times</p><script>Ruby on Rails</script>"
            ),
            "<p class=\"x\">ruby-on-rails, 2000 times</p><script>Ruby on Rails</script>"
        );
    }

    #[test]
    fn loads_configured_dictionaries() {
        init_tracing();
        let path = env::temp_dir().join("jargon-english-processor-terms.json");
        fs::write(&path, TERMS).unwrap();
        let missing = env::temp_dir().join("jargon-english-processor-missing.json");

        let mut config = config(false, false);
        config.dictionary.paths = vec![
            missing.display().to_string(),
            path.display().to_string(),
        ];

        let processor = EnglishProcessor::from_config(&config).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(processor.terms().map(TermDictionary::entry_count), Some(9));
        assert_eq!(processor.lemmatize_str("node JS"), "node.js");
    }

    #[test]
    fn disabled_dictionaries_are_not_loaded() {
        let path = env::temp_dir().join("jargon-english-processor-disabled.json");
        fs::write(&path, TERMS).unwrap();

        let mut config = config(false, false);
        config.dictionary.enabled = false;
        config.dictionary.paths = vec![path.display().to_string()];

        let processor = EnglishProcessor::from_config(&config).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(processor.terms().is_none());
    }

    #[test]
    fn zero_gram_length_fails() {
        let mut config = config(true, false);
        config.lemmatizer.max_gram_length = 0;
        assert!(EnglishProcessor::from_config(&config).is_err());
    }
}
