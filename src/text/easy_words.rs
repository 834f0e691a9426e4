//! Embedded Dale-Chall easy-word list.

use std::collections::HashSet;
use std::sync::LazyLock;

static EASY_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("dale_chall.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

/// Whether a word is on the Dale-Chall easy-word list.
///
/// Matching is case-insensitive and tolerates a trailing plural `s`,
/// so "Apples" matches the listed "apple".
pub fn is_easy_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    if EASY_WORDS.contains(lower.as_str()) {
        return true;
    }
    lower
        .strip_suffix('s')
        .is_some_and(|stem| EASY_WORDS.contains(stem))
}
