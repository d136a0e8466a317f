use jargon_config::lemmatizer::LemmatizerConfig;

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::token::Token;
use crate::token_buffer::TokenBuffer;
use crate::word_run::WordRun;

const INITIAL_WINDOW: usize = 4;

/// A dictionary paired with the longest word run to try against it
#[derive(Debug, Clone)]
pub struct Lemmatizer<D> {
    dictionary: D,
    max_gram_length: usize,
}

impl<D: Dictionary> Lemmatizer<D> {
    pub fn new(dictionary: D, max_gram_length: usize) -> Result<Self> {
        if max_gram_length == 0 {
            return Err(Error::InvalidGramLength(max_gram_length));
        }

        Ok(Self {
            dictionary,
            max_gram_length,
        })
    }

    pub fn from_config(dictionary: D, config: &LemmatizerConfig) -> Result<Self> {
        Self::new(dictionary, config.max_gram_length)
    }

    pub fn max_gram_length(&self) -> usize {
        self.max_gram_length
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    fn lookup(&self, words: &[String]) -> Option<String> {
        self.dictionary.lookup(words)
    }

    pub fn lemmatize<I>(self, tokens: I) -> LemmaTokens<I::IntoIter, D>
    where
        I: IntoIterator<Item = Token>,
    {
        LemmaTokens::new(self, tokens.into_iter())
    }
}

/// Token stream with multi-word terms replaced by their canonical lemma.
///
/// Matching is greedy: at each word, runs of `max_gram_length` words down to
/// one are tried, and the longest run the dictionary knows wins. Spaces may
/// sit between the words of a run; punctuation ends it.
pub struct LemmaTokens<I, D> {
    incoming: I,
    buffer: TokenBuffer,
    run: WordRun,
    lemmatizer: Lemmatizer<D>,
}

impl<I, D> LemmaTokens<I, D>
where
    I: Iterator<Item = Token>,
    D: Dictionary,
{
    pub fn new(lemmatizer: Lemmatizer<D>, incoming: I) -> Self {
        Self {
            incoming,
            buffer: TokenBuffer::with_capacity(INITIAL_WINDOW),
            run: WordRun::with_capacity(lemmatizer.max_gram_length),
            lemmatizer,
        }
    }

    /// The upstream stream, e.g. to collect a tokenizer's IO error after draining
    pub fn get_mut(&mut self) -> &mut I {
        &mut self.incoming
    }

    /// Pull from upstream until the window holds at least `count` tokens
    fn fill(&mut self, count: usize) -> bool {
        while self.buffer.len() < count {
            match self.incoming.next() {
                Some(token) => self.buffer.push(token),
                None => return false,
            }
        }
        true
    }

    fn next_token(&mut self) -> Option<Token> {
        if !self.fill(1) {
            return None;
        }

        if !self.buffer.first()?.is_word() {
            return self.buffer.pop_front();
        }

        Some(self.ngrams())
    }

    fn ngrams(&mut self) -> Token {
        for take in (1..=self.lemmatizer.max_gram_length).rev() {
            let Some(consumed) = self.word_run(take) else {
                continue;
            };

            if let Some(canonical) = self.lemmatizer.lookup(self.run.words()) {
                tracing::trace!(
                    "lemma {:?} replaces {:?} ({} tokens)",
                    canonical,
                    self.run.words(),
                    consumed
                );
                self.buffer.remove_from_front(consumed);
                return Token::lemma(canonical);
            }

            if take == 1 {
                if let Some(original) = self.buffer.pop_front() {
                    return original;
                }
            }
        }

        unreachable!("no n-gram length resolved a buffered word token, not even one")
    }

    /// Collect `take` words from the front of the window into the run.
    ///
    /// Returns how many tokens (words plus the spaces between them) the run
    /// spans, or `None` when punctuation or the end of input comes first.
    pub(crate) fn word_run(&mut self, take: usize) -> Option<usize> {
        self.run.clear();
        let mut consumed = 0;

        while self.run.len() < take {
            if !self.fill(consumed + 1) {
                return None;
            }

            let token = self.buffer.get(consumed)?;
            if token.is_punct() {
                return None;
            }
            if !token.is_space() {
                self.run.push(token.text());
            }
            consumed += 1;
        }

        Some(consumed)
    }
}

impl<I, D> Iterator for LemmaTokens<I, D>
where
    I: Iterator<Item = Token>,
    D: Dictionary,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
