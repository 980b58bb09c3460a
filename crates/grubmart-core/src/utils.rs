//! Text and input helpers shared by the add-item form and the renderers

/// Count the words in a piece of text
///
/// A word is any maximal run of non-whitespace; an empty or all-whitespace
/// string counts zero.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate text to at most `max_words` words
///
/// Leading whitespace is dropped. Input already within the limit is kept
/// verbatim (internal spacing preserved); over-limit input is rebuilt from
/// the first `max_words` words joined by single spaces.
#[must_use]
pub fn clamp_words(input: &str, max_words: usize) -> String {
    let input = input.trim_start();
    if word_count(input) <= max_words {
        return input.to_string();
    }

    input
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words still available before hitting the limit, clamped at zero
#[must_use]
pub fn remaining_words(text: &str, max_words: usize) -> usize {
    max_words.saturating_sub(word_count(text))
}

/// Strip everything but ASCII digits, the constraint applied to the price
/// field as the user types
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format an amount with thousands separators, e.g. `1050` → `"1,050"`
#[must_use]
pub fn format_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative {
        format!("-{out}")
    } else {
        out
    }
}
