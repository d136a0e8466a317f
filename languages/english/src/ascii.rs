use jargon_core::Dictionary;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds single words to their closest ASCII spelling: "naïve" → "naive", "Straße" → "Strasse".
///
/// Words that are already ASCII, or have no ASCII equivalent, are not found.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFoldDictionary;

impl AsciiFoldDictionary {
    pub const MAX_GRAM_LENGTH: usize = 1;
}

impl Dictionary for AsciiFoldDictionary {
    fn lookup(&self, words: &[String]) -> Option<String> {
        let [word] = words else {
            return None;
        };
        if word.is_ascii() {
            return None;
        }

        let folded = fold(word);
        (folded != *word).then_some(folded)
    }
}

fn fold(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.nfkd().filter(|&c| !is_combining_mark(c)) {
        match fold_special(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Letters and marks with no canonical decomposition to ASCII
fn fold_special(c: char) -> Option<&'static str> {
    let folded = match c {
        'ß' => "ss",
        'ẞ' => "SS",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'ł' => "l",
        'Ł' => "L",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        'ħ' => "h",
        'Ħ' => "H",
        '‘' | '’' | '‚' | '′' => "'",
        '‐' | '‑' | '‒' | '–' => "-",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use jargon_core::{Lemmatizer, TokensExt, tokenize};

    use super::*;

    fn lookup(word: &str) -> Option<String> {
        AsciiFoldDictionary.lookup(&[word.to_string()])
    }

    #[test]
    fn folds_accents_and_letters() {
        assert_eq!(lookup("naïve").as_deref(), Some("naive"));
        assert_eq!(lookup("Café").as_deref(), Some("Cafe"));
        assert_eq!(lookup("Straße").as_deref(), Some("Strasse"));
        assert_eq!(lookup("Ærøskøbing").as_deref(), Some("AEroskobing"));
        assert_eq!(lookup("Łódź").as_deref(), Some("Lodz"));
        assert_eq!(lookup("ﬁnance").as_deref(), Some("finance"));
        assert_eq!(lookup("it’ll").as_deref(), Some("it'll"));
    }

    #[test]
    fn ascii_and_unfoldable_words_are_not_found() {
        assert_eq!(lookup("plain"), None);
        assert_eq!(lookup("東京"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn only_single_words() {
        let words = vec!["café".to_string(), "crème".to_string()];
        assert_eq!(AsciiFoldDictionary.lookup(&words), None);
    }

    #[test]
    fn through_lemmatizer() {
        let lemmatizer =
            Lemmatizer::new(AsciiFoldDictionary, AsciiFoldDictionary::MAX_GRAM_LENGTH).unwrap();
        let got = tokenize("Crème brûlée, s’il vous plaît.")
            .lemmatize(lemmatizer)
            .into_text();
        assert_eq!(got, "Creme brulee, s'il vous plait.");
    }
}
