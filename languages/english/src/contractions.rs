use std::collections::HashMap;

use jargon_core::Dictionary;

const CONTRACTIONS: [(&str, &str); 48] = [
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("she'll", "she will"),
    ("he'll", "he will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("i'm", "i am"),
    ("you're", "you are"),
    ("she's", "she is"),
    ("he's", "he is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'd", "i would"),
    ("you'd", "you would"),
    ("she'd", "she would"),
    ("he'd", "he would"),
    ("we'd", "we would"),
    ("they'd", "they would"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("haven't", "have not"),
    ("hadn't", "had not"),
    ("can't", "can not"),
    ("won't", "will not"),
    ("will've", "will have"),
    ("wouldn't", "would not"),
    ("would've", "would have"),
    ("couldn't", "could not"),
    ("could've", "could have"),
    ("shouldn't", "should not"),
    ("should've", "should have"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("wanna", "want to"),
    ("gimme", "give me"),
    ("cannot", "can not"),
];

/// Expands single-word English contractions: "don't" → "do not", "We’ve" → "We have".
///
/// Straight and curly apostrophes are both accepted. Lowercase, Title and
/// UPPER input expand in the same case; other mixed case is not recognized.
#[derive(Debug, Clone)]
pub struct ContractionDictionary {
    variations: HashMap<String, String>,
}

impl ContractionDictionary {
    /// Contractions are always one word
    pub const MAX_GRAM_LENGTH: usize = 1;

    pub fn new() -> Self {
        let cases: [fn(&str) -> String; 3] = [str::to_lowercase, title, str::to_uppercase];
        let mut variations = HashMap::new();

        for (contraction, expansion) in CONTRACTIONS {
            for spelling in [contraction.to_string(), contraction.replace('\'', "’")] {
                for case in cases {
                    variations
                        .entry(case(&spelling))
                        .or_insert_with(|| case(expansion));
                }
            }
        }

        Self { variations }
    }

    pub fn entry_count(&self) -> usize {
        self.variations.len()
    }
}

impl Default for ContractionDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for ContractionDictionary {
    fn lookup(&self, words: &[String]) -> Option<String> {
        match words {
            [word] => self.variations.get(word).cloned(),
            _ => None,
        }
    }
}

fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
