use jargon_core::Dictionary;

const ONES: [&str; 19] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [(&str, i64); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const MAGNITUDES: [(&str, i64); 7] = [
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
    ("quadrillion", 1_000_000_000_000_000),
    ("quintillion", 1_000_000_000_000_000_000),
];

/// Multiplicative number phrases: "three hundred" → "300", "2.54 million" → "2540000".
///
/// The first word is an integer, a decimal, or a number word up to
/// ninety-nine; every following word must be a magnitude. Additive phrases
/// like "one thousand five hundred" are not recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberDictionary;

impl Dictionary for NumberDictionary {
    fn lookup(&self, words: &[String]) -> Option<String> {
        let (first, rest) = words.split_first()?;
        let first = normalize(first);

        let magnitudes = rest
            .iter()
            .map(|word| magnitude(&normalize(word)))
            .collect::<Option<Vec<i64>>>()?;

        if let Ok(value) = first.parse::<i64>() {
            // zip codes, serial numbers and the like
            if has_leading_zero(&first) {
                return None;
            }
            return product(value, &magnitudes);
        }

        if is_decimal(&first) {
            let value: f64 = first.parse().ok()?;
            let result = magnitudes.iter().fold(value, |acc, &m| acc * m as f64);
            return Some(result.to_string());
        }

        let value = number_word(&first)?;
        product(value, &magnitudes)
    }
}

/// Lowercase, drop commas and hyphens, keep a leading minus sign
fn normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    if word.starts_with('-') {
        out.push('-');
    }
    for c in word.chars().filter(|c| !matches!(c, ',' | '-')) {
        out.extend(c.to_lowercase());
    }
    out
}

fn has_leading_zero(s: &str) -> bool {
    s.starts_with('0') || s.starts_with("+0") || s.starts_with("-0")
}

/// Optional sign, then digits around a single decimal point
fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let Some((whole, fraction)) = unsigned.split_once('.') else {
        return false;
    };

    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && digits(whole) && digits(fraction)
}

fn number_word(s: &str) -> Option<i64> {
    if let Some(i) = ONES.iter().position(|&one| one == s) {
        return Some(i as i64 + 1);
    }

    TENS.iter().find_map(|&(tens, value)| {
        let rest = s.strip_prefix(tens)?;
        if rest.is_empty() {
            return Some(value);
        }
        let i = ONES[..9].iter().position(|&one| one == rest)?;
        Some(value + i as i64 + 1)
    })
}

fn magnitude(s: &str) -> Option<i64> {
    MAGNITUDES
        .iter()
        .find(|&&(name, _)| name == s)
        .map(|&(_, value)| value)
}

fn product(value: i64, magnitudes: &[i64]) -> Option<String> {
    let result = magnitudes
        .iter()
        .try_fold(value, |acc, &m| acc.checked_mul(m));

    if result.is_none() {
        tracing::trace!("number phrase overflows: {} × {:?}", value, magnitudes);
    }
    result.map(|n| n.to_string())
}
