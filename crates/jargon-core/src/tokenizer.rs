use std::io;

use crate::char_buffer::CharBuffer;
use crate::classify::{is_punct, is_space, is_terminator, might_be_leading_punct, might_be_mid_punct};
use crate::scalar::ScalarSource;
use crate::token::Token;

/// Streaming scanner turning scalars into space, punctuation and word tokens.
///
/// Lookahead is a single pushed-back scalar; every decision reads one scalar
/// ahead at most, so scanning is linear in the input.
pub struct Tokenizer<S> {
    source: S,
    pending: Option<char>,
    buffer: CharBuffer,
}

impl<S: ScalarSource> Tokenizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: None,
            buffer: CharBuffer::new(),
        }
    }

    /// IO failure that cut the input short, once the stream has ended
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.source.take_error()
    }

    fn read(&mut self) -> Option<char> {
        self.pending.take().or_else(|| self.source.read_scalar())
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "only one scalar of pushback");
        self.pending = Some(c);
    }

    fn peek_terminator(&mut self) -> bool {
        let next = self.read();
        if let Some(c) = next {
            self.unread(c);
        }
        is_terminator(next)
    }

    fn next_token(&mut self) -> Option<Token> {
        // left over from the previous word, flush it
        if !self.buffer.is_empty() {
            return self.flush();
        }

        let c = self.read()?;
        self.buffer.append(c);

        if is_space(c) {
            return self.flush();
        }

        if is_punct(c) {
            if might_be_leading_punct(c) && !self.peek_terminator() {
                return self.read_word();
            }
            return self.flush();
        }

        self.read_word()
    }

    fn read_word(&mut self) -> Option<Token> {
        loop {
            let Some(c) = self.read() else {
                return self.flush();
            };

            if might_be_mid_punct(c) {
                if self.peek_terminator() {
                    let token = self.flush();
                    self.buffer.append(c);
                    return token;
                }

                self.buffer.append(c);
                continue;
            }

            if is_punct(c) || is_space(c) {
                let token = self.flush();
                self.buffer.append(c);
                return token;
            }

            self.buffer.append(c);
        }
    }

    fn flush(&mut self) -> Option<Token> {
        if self.buffer.is_empty() {
            return None;
        }

        let token = match self.buffer.single_scalar() {
            Some(c) => Token::from_scalar(c),
            None => Token::word(self.buffer.as_str()),
        };

        self.buffer.reset();
        Some(token)
    }
}

impl<S: ScalarSource> Iterator for Tokenizer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
