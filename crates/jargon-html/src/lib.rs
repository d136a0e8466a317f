use std::io::{self, Read};

use html5gum::{DefaultEmitter, IoReader, Token as HtmlToken};
use jargon_config::html::HtmlConfig;
use jargon_core::{StringScalars, Token, Tokenizer};

mod serialize;

pub fn tokenize_html(html: &str) -> HtmlTokens<&[u8]> {
    HtmlTokens::new(html.as_bytes())
}

pub fn tokenize_html_reader<R: Read>(reader: R) -> HtmlTokens<R> {
    HtmlTokens::new(reader)
}

/// Tokens of an HTML document.
///
/// Tags, comments and doctypes come through whole as punctuation. Text is
/// tokenized like plain text, except inside raw-text elements where it is a
/// single word token.
pub struct HtmlTokens<R: Read> {
    html: html5gum::Tokenizer<IoReader<R>, DefaultEmitter>,
    text: Option<Tokenizer<StringScalars>>,
    parent: Option<String>,
    config: HtmlConfig,
    error: Option<io::Error>,
    done: bool,
}

impl<R: Read> HtmlTokens<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, HtmlConfig::default())
    }

    pub fn with_config(reader: R, config: HtmlConfig) -> Self {
        let mut emitter = DefaultEmitter::default();
        // script and style contents stay text instead of being parsed as markup
        emitter.naively_switch_states(true);

        Self {
            html: html5gum::Tokenizer::new_with_emitter(IoReader::new(reader), emitter),
            text: None,
            parent: None,
            config,
            error: None,
            done: false,
        }
    }

    /// IO failure that cut the document short, once the stream has ended
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(text) = self.text.as_mut() {
                if let Some(token) = text.next() {
                    return Some(token);
                }
                self.text = None;
            }

            if self.done {
                return None;
            }

            let fragment = match self.html.next() {
                Some(Ok(fragment)) => fragment,
                Some(Err(e)) => {
                    tracing::warn!("HTML input ended by IO error: {}", e);
                    self.error = Some(e);
                    self.done = true;
                    return None;
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            match fragment {
                HtmlToken::StartTag(tag) => {
                    let name = String::from_utf8_lossy(&tag.name).into_owned();
                    if self.config.is_raw_text_element(&name) {
                        self.parent = Some(name);
                    }
                    return Some(Token::punct(serialize::start_tag(&tag)));
                }
                HtmlToken::EndTag(tag) => {
                    let name = String::from_utf8_lossy(&tag.name);
                    if self
                        .parent
                        .as_deref()
                        .is_some_and(|parent| parent.eq_ignore_ascii_case(&name))
                    {
                        self.parent = None;
                    }
                    return Some(Token::punct(serialize::end_tag(&name)));
                }
                HtmlToken::String(text) => {
                    let text = String::from_utf8_lossy(&text).into_owned();
                    if text.is_empty() {
                        continue;
                    }
                    if self.parent.is_some() {
                        return Some(Token::word(text));
                    }
                    self.text = Some(Tokenizer::new(StringScalars::new(text)));
                }
                HtmlToken::Comment(comment) => {
                    return Some(Token::punct(serialize::comment(&String::from_utf8_lossy(
                        &comment,
                    ))));
                }
                HtmlToken::Doctype(doctype) => {
                    return Some(Token::punct(serialize::doctype(&String::from_utf8_lossy(
                        &doctype.name,
                    ))));
                }
                HtmlToken::Error(e) => {
                    tracing::trace!("skipping HTML parse error {:?}", e);
                }
            }
        }
    }
}

impl<R: Read> Iterator for HtmlTokens<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
