//! Text tokenization and counting primitives.
//!
//! Everything the readability formulas consume lives here: word, sentence,
//! syllable, and character counts, plus the difficult-word counter backed
//! by the embedded Dale-Chall easy-word list. All functions are pure.

mod counts;
mod easy_words;

pub use counts::{
    difficult_word_count, letter_count, lexicon_count, polysyllable_count, prefix_of_words,
    sentence_count, syllable_count, syllables_in_word, words,
};
pub use easy_words::is_easy_word;
