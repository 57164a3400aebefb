//! Formatting utilities for terminal output

/// Join letters as a comma separated list, e.g. `a, c, t`
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len() * 3);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        result.push(*letter);
    }
    result
}

/// Whether a replay answer means "yes"
///
/// Only the first character counts, so "yes", "Y" and "yep" all qualify;
/// empty input does not.
#[must_use]
pub fn wants_replay(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
