//! Word, sentence, syllable, and character counting.

use regex::Regex;
use std::sync::LazyLock;

use super::is_easy_word;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9']+").expect("valid word regex"));

static SENTENCE_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Tokenize text into words.
///
/// A word is a run of ASCII letters, digits, or apostrophes, so
/// contractions like "don't" stay whole and punctuation is dropped.
pub fn words(text: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of words in the text.
pub fn lexicon_count(text: &str) -> usize {
    words(text).len()
}

/// Number of sentences in the text.
///
/// Sentences are segments terminated by runs of `.`, `!`, or `?` that
/// contain at least one word. Non-empty text with no terminator counts
/// as a single sentence.
pub fn sentence_count(text: &str) -> usize {
    let count = SENTENCE_SPLIT_REGEX
        .split(text)
        .filter(|segment| lexicon_count(segment) > 0)
        .count();
    if count == 0 && lexicon_count(text) > 0 {
        1
    } else {
        count
    }
}

/// Number of letters and digits, ignoring punctuation and whitespace.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphanumeric()).count()
}

/// Heuristic syllable count for a single word.
///
/// Counts vowel groups (a, e, i, o, u, y), drops a silent trailing `e`
/// unless the word ends in `le`, and never reports fewer than one
/// syllable for a non-empty token.
pub fn syllables_in_word(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if letters.is_empty() {
        // Numeric tokens like "1984" still get voiced as one unit.
        return 1;
    }

    let mut count = 0;
    let mut prev_was_vowel = false;
    for c in letters.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if count > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}

/// Total syllables across all words in the text.
pub fn syllable_count(text: &str) -> usize {
    words(text).iter().map(|w| syllables_in_word(w)).sum()
}

/// Number of words with three or more syllables.
pub fn polysyllable_count(text: &str) -> usize {
    words(text)
        .iter()
        .filter(|w| syllables_in_word(w) >= 3)
        .count()
}

/// Slice of `text` covering its first `n` words.
///
/// Returns the whole text when it has `n` words or fewer. The slice ends
/// at the last character of the `n`th word, so trailing punctuation of
/// that word is excluded but sentence terminators before it are kept.
pub fn prefix_of_words(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match WORD_REGEX.find_iter(text).nth(n - 1) {
        Some(m) => &text[..m.end()],
        None => text,
    }
}

/// Number of words considered difficult for the Dale-Chall formula:
/// two or more syllables and not on the easy-word list.
pub fn difficult_word_count(text: &str) -> usize {
    words(text)
        .iter()
        .filter(|w| syllables_in_word(w) >= 2 && !is_easy_word(w))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_splits_on_punctuation() {
        assert_eq!(words("Hello, world!"), vec!["Hello", "world"]);
    }

    #[test]
    fn words_keeps_contractions() {
        assert_eq!(words("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn lexicon_count_empty_text() {
        assert_eq!(lexicon_count(""), 0);
        assert_eq!(lexicon_count("  ...  "), 0);
    }

    #[test]
    fn sentence_count_basic() {
        assert_eq!(sentence_count("One. Two. Three."), 3);
    }

    #[test]
    fn sentence_count_mixed_terminators() {
        assert_eq!(sentence_count("Really? Yes! Good."), 3);
    }

    #[test]
    fn sentence_count_ellipsis_is_one_terminator() {
        assert_eq!(sentence_count("Wait... what? Ok."), 3);
    }

    #[test]
    fn sentence_count_unterminated_text_is_one() {
        assert_eq!(sentence_count("no terminator here"), 1);
    }

    #[test]
    fn sentence_count_empty_is_zero() {
        assert_eq!(sentence_count(""), 0);
        assert_eq!(sentence_count("..."), 0);
    }

    #[test]
    fn letter_count_ignores_punctuation_and_spaces() {
        assert_eq!(letter_count("a b, c!"), 3);
        assert_eq!(letter_count("abc123"), 6);
    }

    #[test]
    fn syllables_single_vowel_group() {
        assert_eq!(syllables_in_word("the"), 1);
        assert_eq!(syllables_in_word("cat"), 1);
    }

    #[test]
    fn syllables_silent_e() {
        assert_eq!(syllables_in_word("name"), 1);
        assert_eq!(syllables_in_word("move"), 1);
    }

    #[test]
    fn syllables_le_ending_keeps_final_syllable() {
        assert_eq!(syllables_in_word("table"), 2);
        assert_eq!(syllables_in_word("little"), 2);
    }

    #[test]
    fn syllables_polysyllabic_words() {
        assert_eq!(syllables_in_word("beautiful"), 3);
        assert_eq!(syllables_in_word("understanding"), 4);
    }

    #[test]
    fn syllables_numeric_token_is_one() {
        assert_eq!(syllables_in_word("1984"), 1);
    }

    #[test]
    fn polysyllable_count_finds_long_words() {
        assert_eq!(polysyllable_count("a beautiful elephant sat"), 2);
    }

    #[test]
    fn prefix_of_words_takes_first_n() {
        assert_eq!(prefix_of_words("one two three four", 2), "one two");
        assert_eq!(prefix_of_words("one. two! three", 2), "one. two");
    }

    #[test]
    fn prefix_of_words_short_text_returns_all() {
        assert_eq!(prefix_of_words("one two", 100), "one two");
    }

    #[test]
    fn prefix_of_zero_words_is_empty() {
        assert_eq!(prefix_of_words("one two", 0), "");
    }

    #[test]
    fn difficult_words_excludes_easy_list() {
        // "morning" is on the easy list, "analysis" is not.
        assert_eq!(difficult_word_count("good morning analysis"), 1);
    }

    #[test]
    fn difficult_words_excludes_monosyllables() {
        // Rare but single-syllable words do not count as difficult.
        assert_eq!(difficult_word_count("the quark spins"), 0);
    }
}
