use proptest::prelude::*;

use crate::{Token, TokensExt, tokenize, tokenize_utf16};

fn text() -> impl Strategy<Value = String> {
    // weighted toward the scalars that drive segmentation decisions
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z0-9]",
            2 => "[ \t\r\n]",
            3 => r"[.,:;'’?&!()\[\]{}\x22#@*%_/\\+=-]",
            1 => any::<char>().prop_map(|c| c.to_string()),
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn segmentation_is_lossless(input in text()) {
        prop_assert_eq!(tokenize(&input).into_text(), input);
    }

    #[test]
    fn words_never_end_in_comma_or_period(input in text()) {
        for token in tokenize(&input) {
            if token.text().chars().count() > 1 {
                prop_assert!(!token.text().ends_with(','), "{:?}", token);
                prop_assert!(!token.text().ends_with('.'), "{:?}", token);
            }
        }
    }

    #[test]
    fn punct_and_space_are_exclusive(input in text()) {
        for token in tokenize(&input) {
            prop_assert!(!(token.is_punct() && token.is_space()), "{:?}", token);
            prop_assert!(!token.is_lemma());
            prop_assert!(!token.text().is_empty());
        }
    }

    #[test]
    fn space_and_punct_tokens_are_single_scalars(input in text()) {
        for token in tokenize(&input).filter(|t| !t.is_word()) {
            prop_assert_eq!(token.text().chars().count(), 1, "{:?}", token);
        }
    }

    #[test]
    fn utf16_matches_str(input in text()) {
        let from_str: Vec<Token> = tokenize(&input).collect();
        let from_utf16: Vec<Token> = tokenize_utf16(input.encode_utf16()).collect();
        prop_assert_eq!(from_str, from_utf16);
    }
}
