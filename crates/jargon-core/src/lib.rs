pub mod char_buffer;
pub mod classify;
pub mod dictionary;
pub mod error;
pub mod lemmatizer;
pub mod scalar;
pub mod token;
pub mod token_buffer;
pub mod tokenizer;
pub mod tokens;
pub mod word_run;

#[cfg(test)]
mod tests;

use std::io::{BufReader, Read};

pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use lemmatizer::{LemmaTokens, Lemmatizer};
pub use scalar::{ReadScalars, ScalarSource, StrScalars, StringScalars, Utf16Scalars};
pub use token::Token;
pub use tokenizer::Tokenizer;
pub use tokens::TokensExt;

pub fn tokenize(text: &str) -> Tokenizer<StrScalars<'_>> {
    Tokenizer::new(StrScalars::new(text))
}

pub fn tokenize_string(text: String) -> Tokenizer<StringScalars> {
    Tokenizer::new(StringScalars::new(text))
}

/// Tokenize UTF-8 from a reader. Check [`Tokenizer::take_error`] after draining.
pub fn tokenize_reader<R: Read>(reader: R) -> Tokenizer<ReadScalars<BufReader<R>>> {
    Tokenizer::new(ReadScalars::new(BufReader::new(reader)))
}

pub fn tokenize_utf16<I>(units: I) -> Tokenizer<Utf16Scalars<I::IntoIter>>
where
    I: IntoIterator<Item = u16>,
{
    Tokenizer::new(Utf16Scalars::new(units.into_iter()))
}
