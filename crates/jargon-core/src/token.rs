use std::borrow::Cow;
use std::fmt;

use crate::classify;

/// A classified slice of input text, or a lemma substituted for one or more of them.
///
/// Punctuation and space are never both set. `is_lemma` is only set by the lemmatizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Token {
    text: Cow<'static, str>,
    punct: bool,
    space: bool,
    lemma: bool,
}

const SPACE: Token = Token::known(" ", false, true);
// line and column separators end a word run, so they count as punctuation
const CARRIAGE_RETURN: Token = Token::known("\r", true, false);
const LINE_FEED: Token = Token::known("\n", true, false);
const TAB: Token = Token::known("\t", true, false);
const PERIOD: Token = Token::known(".", true, false);
const COMMA: Token = Token::known(",", true, false);

impl Token {
    const fn known(text: &'static str, punct: bool, space: bool) -> Self {
        Self {
            text: Cow::Borrowed(text),
            punct,
            space,
            lemma: false,
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            punct: false,
            space: false,
            lemma: false,
        }
    }

    pub fn punct(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            punct: true,
            space: false,
            lemma: false,
        }
    }

    pub fn space(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            punct: false,
            space: true,
            lemma: false,
        }
    }

    /// A dictionary canonical form standing in for the tokens it replaced
    pub fn lemma(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            punct: false,
            space: false,
            lemma: true,
        }
    }

    /// Token for a single scalar, shared for the handful of very common ones
    pub(crate) fn from_scalar(c: char) -> Self {
        match c {
            ' ' => SPACE,
            '\r' => CARRIAGE_RETURN,
            '\n' => LINE_FEED,
            '\t' => TAB,
            '.' => PERIOD,
            ',' => COMMA,
            _ => Self {
                text: Cow::Owned(c.to_string()),
                punct: classify::is_punct(c),
                space: classify::is_space(c),
                lemma: false,
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_punct(&self) -> bool {
        self.punct
    }

    pub fn is_space(&self) -> bool {
        self.space
    }

    pub fn is_lemma(&self) -> bool {
        self.lemma
    }

    /// Neither punctuation nor space; only words take part in lemma matching
    pub fn is_word(&self) -> bool {
        !self.punct && !self.space
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
