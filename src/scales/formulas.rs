//! Readability formulas.
//!
//! Standard published coefficients over the counts from [`crate::text`].
//! Every function is pure; scores are rounded to two decimal places.
//! Division-by-zero hazards on empty text are avoided by returning zero
//! ratios, but scales with real preconditions (SMOG's sentence floor,
//! the consensus metric's non-empty requirement) guard via precheck
//! before these functions run.

use crate::text::{
    difficult_word_count, letter_count, lexicon_count, polysyllable_count, prefix_of_words,
    sentence_count, syllable_count, syllables_in_word, words,
};

use super::clarify::ordinal_suffix;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Flesch Reading Ease: 206.835 − 1.015(words/sentences) − 84.6(syllables/words).
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words_per_sentence = ratio(lexicon_count(text), sentence_count(text));
    let syllables_per_word = ratio(syllable_count(text), lexicon_count(text));
    round2(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch-Kincaid grade: 0.39(words/sentences) + 11.8(syllables/words) − 15.59.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    let words_per_sentence = ratio(lexicon_count(text), sentence_count(text));
    let syllables_per_word = ratio(syllable_count(text), lexicon_count(text));
    round2(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Gunning Fog: 0.4 × (words/sentences + 100 × polysyllables/words).
pub fn gunning_fog(text: &str) -> f64 {
    let words_per_sentence = ratio(lexicon_count(text), sentence_count(text));
    let percent_complex = 100.0 * ratio(polysyllable_count(text), lexicon_count(text));
    round2(0.4 * (words_per_sentence + percent_complex))
}

/// SMOG index: 1.043 × sqrt(polysyllables × 30/sentences) + 3.1291.
///
/// Only meaningful for texts of 30+ sentences; the scale's precheck
/// enforces that floor before this runs.
pub fn smog_index(text: &str) -> f64 {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return 0.0;
    }
    let poly = polysyllable_count(text) as f64;
    round2(1.043 * (poly * 30.0 / sentences as f64).sqrt() + 3.1291)
}

/// Automated Readability Index: 4.71(chars/words) + 0.5(words/sentences) − 21.43.
pub fn automated_readability_index(text: &str) -> f64 {
    let chars_per_word = ratio(letter_count(text), lexicon_count(text));
    let words_per_sentence = ratio(lexicon_count(text), sentence_count(text));
    round2(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43)
}

/// Coleman-Liau index: 0.058L − 0.296S − 15.8, where L is letters per 100
/// words and S is sentences per 100 words.
pub fn coleman_liau_index(text: &str) -> f64 {
    let letters_per_100 = 100.0 * ratio(letter_count(text), lexicon_count(text));
    let sentences_per_100 = 100.0 * ratio(sentence_count(text), lexicon_count(text));
    round2(0.058 * letters_per_100 - 0.296 * sentences_per_100 - 15.8)
}

/// Linsear Write formula over the first 100 words: easy words (one or two
/// syllables) score 1, hard words score 3; the sum is divided by the
/// sentence count of the sample, then halved (minus one below the
/// 20-point threshold).
pub fn linsear_write_formula(text: &str) -> f64 {
    let sample = prefix_of_words(text, 100);
    let sentences = sentence_count(sample);
    if sentences == 0 {
        return 0.0;
    }

    let mut points = 0.0;
    for word in words(sample) {
        if syllables_in_word(word) >= 3 {
            points += 3.0;
        } else {
            points += 1.0;
        }
    }

    let provisional = points / sentences as f64;
    let grade = if provisional > 20.0 {
        provisional / 2.0
    } else {
        (provisional - 2.0) / 2.0
    };
    round2(grade)
}

/// Dale-Chall readability score: 0.1579 × percent-difficult + 0.0496 ×
/// words-per-sentence, plus a 3.6365 adjustment when more than 5% of the
/// words are difficult.
pub fn dale_chall_readability_score(text: &str) -> f64 {
    let word_total = lexicon_count(text);
    let percent_difficult = 100.0 * ratio(difficult_word_count(text), word_total);
    let words_per_sentence = ratio(word_total, sentence_count(text));

    let mut score = 0.1579 * percent_difficult + 0.0496 * words_per_sentence;
    if percent_difficult > 5.0 {
        score += 3.6365;
    }
    round2(score)
}

fn dale_chall_grade(score: f64) -> i64 {
    if score < 5.0 {
        4
    } else if score < 6.0 {
        6
    } else if score < 7.0 {
        8
    } else if score < 8.0 {
        10
    } else if score < 9.0 {
        12
    } else {
        14
    }
}

/// Readability consensus ("text standard"): the most agreed-upon grade
/// across the grade-level formulas, rendered as a range like
/// "8th and 9th grade". Ties break toward the lower grade.
pub fn readability_consensus(text: &str) -> String {
    let mut votes: Vec<i64> = Vec::new();
    for grade in [
        flesch_kincaid_grade(text),
        gunning_fog(text),
        smog_index(text),
        automated_readability_index(text),
        coleman_liau_index(text),
        linsear_write_formula(text),
    ] {
        votes.push(grade.floor() as i64);
        votes.push(grade.ceil() as i64);
    }
    votes.push(dale_chall_grade(dale_chall_readability_score(text)));

    let mut tally: Vec<(i64, usize)> = Vec::new();
    for vote in &votes {
        match tally.iter_mut().find(|(grade, _)| grade == vote) {
            Some((_, count)) => *count += 1,
            None => tally.push((*vote, 1)),
        }
    }
    // Most votes wins; ties break toward the lower grade.
    tally.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let grade = tally.first().map(|(g, _)| *g).unwrap_or(0).max(0);
    let next = grade + 1;
    format!(
        "{}{} and {}{} grade",
        grade,
        ordinal_suffix(grade),
        next,
        ordinal_suffix(next)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "The cat sat on the mat. The dog ran to the park. \
                          We like to play all day.";

    const DENSE: &str = "Notwithstanding considerable institutional opposition, \
                         the comprehensive infrastructure modernization initiative \
                         proceeded expeditiously. Bureaucratic considerations \
                         nevertheless complicated implementation significantly.";

    #[test]
    fn flesch_simple_text_scores_high() {
        let score = flesch_reading_ease(SIMPLE);
        assert!(score > 80.0, "expected easy text, got {score}");
    }

    #[test]
    fn flesch_dense_text_scores_low() {
        let score = flesch_reading_ease(DENSE);
        assert!(score < 30.0, "expected confusing text, got {score}");
    }

    #[test]
    fn flesch_kincaid_orders_simple_below_dense() {
        assert!(flesch_kincaid_grade(SIMPLE) < flesch_kincaid_grade(DENSE));
    }

    #[test]
    fn gunning_fog_zero_polysyllables() {
        // Six one-syllable words, one sentence: 0.4 * 6 = 2.4.
        assert_eq!(gunning_fog("The cat sat on the mat."), 2.4);
    }

    #[test]
    fn smog_empty_text_is_zero() {
        assert_eq!(smog_index(""), 0.0);
    }

    #[test]
    fn smog_formula_known_counts() {
        // 30 identical sentences, each with one polysyllable:
        // 1.043 * sqrt(30 * 30/30) + 3.1291.
        let text = "The elephant walked away. ".repeat(30);
        let expected = round2(1.043 * 30.0_f64.sqrt() + 3.1291);
        assert_eq!(smog_index(&text), expected);
    }

    #[test]
    fn ari_known_counts() {
        // "go to bed" — 7 letters, 3 words, 1 sentence:
        // 4.71*(7/3) + 0.5*3 - 21.43.
        let expected = round2(4.71 * (7.0 / 3.0) + 0.5 * 3.0 - 21.43);
        assert_eq!(automated_readability_index("go to bed"), expected);
    }

    #[test]
    fn coleman_liau_known_counts() {
        // "go to bed" — L = 700/3, S = 100/3.
        let expected = round2(0.058 * (700.0 / 3.0) - 0.296 * (100.0 / 3.0) - 15.8);
        assert_eq!(coleman_liau_index("go to bed"), expected);
    }

    #[test]
    fn linsear_all_easy_words() {
        // 6 easy words, 1 sentence: (6 - 2) / 2 = 2.
        assert_eq!(linsear_write_formula("The cat sat on the mat."), 2.0);
    }

    #[test]
    fn linsear_empty_text_is_zero() {
        assert_eq!(linsear_write_formula(""), 0.0);
    }

    #[test]
    fn dale_chall_all_easy_text() {
        // No difficult words: score is 0.0496 * words-per-sentence only.
        let score = dale_chall_readability_score("The cat sat on the mat.");
        assert_eq!(score, round2(0.0496 * 6.0));
    }

    #[test]
    fn dale_chall_adjustment_applies_over_five_percent() {
        let plain = dale_chall_readability_score("The cat sat on the mat.");
        let hard = dale_chall_readability_score("The anomalous cat sat on the mat.");
        assert!(hard > plain + 3.0, "adjustment missing: {hard} vs {plain}");
    }

    #[test]
    fn consensus_renders_grade_range() {
        let rendered = readability_consensus(SIMPLE);
        assert!(
            rendered.ends_with(" grade"),
            "unexpected shape: {rendered}"
        );
        assert!(rendered.contains(" and "));
    }

    #[test]
    fn consensus_is_deterministic() {
        assert_eq!(readability_consensus(SIMPLE), readability_consensus(SIMPLE));
    }

    #[test]
    fn formulas_are_pure() {
        let a = flesch_reading_ease(DENSE);
        let b = flesch_reading_ease(DENSE);
        assert_eq!(a, b);
    }
}
