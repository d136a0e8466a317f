use std::io::{self, Write};

use crate::dictionary::Dictionary;
use crate::lemmatizer::{LemmaTokens, Lemmatizer};
use crate::token::Token;

/// Adapters over any token stream
pub trait TokensExt: Iterator<Item = Token> + Sized {
    /// Run the stream through a lemmatizer; chains with further lemmatizers
    fn lemmatize<D: Dictionary>(self, lemmatizer: Lemmatizer<D>) -> LemmaTokens<Self, D> {
        lemmatizer.lemmatize(self)
    }

    /// Only the word tokens, lemmas included
    fn words(self) -> impl Iterator<Item = Token> {
        self.filter(Token::is_word)
    }

    fn lemmas(self) -> impl Iterator<Item = Token> {
        self.filter(Token::is_lemma)
    }

    /// Concatenated text of every token
    fn into_text(self) -> String {
        let mut out = String::new();
        for token in self {
            out.push_str(token.text());
        }
        out
    }

    /// Write every token's text, returning the number of bytes written
    fn write_to<W: Write>(self, mut writer: W) -> io::Result<usize> {
        let mut written = 0;
        for token in self {
            writer.write_all(token.text().as_bytes())?;
            written += token.text().len();
        }
        writer.flush()?;
        Ok(written)
    }
}

impl<I: Iterator<Item = Token>> TokensExt for I {}
