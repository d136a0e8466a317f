//! Scalar classification used by the tokenizer.
//!
//! The punctuation exceptions and the mid-word set are hand-picked so that
//! URLs, paths, hashtags, handles and version numbers stay whole. They are
//! intentionally not derived from any single Unicode property.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Unicode punctuation, minus `- # @ * % _ / \`
pub fn is_punct(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation && !is_punct_exception(c)
}

fn is_punct_exception(c: char) -> bool {
    matches!(c, '-' | '#' | '@' | '*' | '%' | '_' | '/' | '\\')
}

/// A leading period may begin a word, as in `.net`
pub fn might_be_leading_punct(c: char) -> bool {
    c == '.'
}

/// Punctuation kept inside a word when followed by a non-terminator, as in `Node.js` or `it'll`
pub fn might_be_mid_punct(c: char) -> bool {
    matches!(c, '.' | '\'' | '’' | ':' | '?' | '&')
}

/// Punctuation, space, or end of input
pub fn is_terminator(next: Option<char>) -> bool {
    match next {
        Some(c) => is_punct(c) || is_space(c),
        None => true,
    }
}
