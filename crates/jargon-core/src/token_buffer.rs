use std::mem;

use crate::token::Token;

const LINEAR_GROWTH: usize = 4096;

/// Lookahead window over a token stream.
///
/// Live tokens occupy `items[front..]`. When the backing store is full, live
/// tokens are first compacted to the start, and capacity only grows when there
/// was nothing to compact.
#[derive(Debug)]
pub struct TokenBuffer {
    items: Vec<Token>,
    front: usize,
}

impl TokenBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.max(1)),
            front: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len() - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token at `index`, relative to the current front
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.items.get(self.front + index)
    }

    pub fn first(&self) -> Option<&Token> {
        self.get(0)
    }

    pub fn push(&mut self, token: Token) {
        if self.items.len() == self.items.capacity() {
            if self.front > 0 {
                self.items.drain(..self.front);
                self.front = 0;
            } else {
                let capacity = self.items.capacity();
                self.items.reserve_exact(next_capacity(capacity) - capacity);
            }
        }

        self.items.push(token);
    }

    pub fn pop_front(&mut self) -> Option<Token> {
        let slot = self.items.get_mut(self.front)?;
        let token = mem::take(slot);
        self.advance(1);
        Some(token)
    }

    /// Discard up to `count` tokens from the front
    pub fn remove_from_front(&mut self, count: usize) {
        self.advance(count.min(self.len()));
    }

    fn advance(&mut self, count: usize) {
        self.front += count;
        if self.front == self.items.len() {
            self.items.clear();
            self.front = 0;
        }
    }
}

fn next_capacity(old: usize) -> usize {
    if old >= LINEAR_GROWTH {
        old + LINEAR_GROWTH
    } else {
        old * 2
    }
}
