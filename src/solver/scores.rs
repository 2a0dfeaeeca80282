//! Static letter-frequency weights
//!
//! Weights come from the published English letter distribution used in
//! cryptography (E 12.7%, T 9.1%, ... Q and Z 0.1%). They are stored in tenths
//! of a percent so that word totals are exact integers and compare without
//! floating point drift.

use crate::core::{ALPHABET_SIZE, Word};

/// Read-only mapping from letter to weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterScoreTable {
    weights: [u32; ALPHABET_SIZE],
}

/// Process-wide letter table, indexed `a = 0 .. z = 25`
pub static LETTER_FREQUENCIES: LetterScoreTable = LetterScoreTable::new([
    82,  // a
    15,  // b
    28,  // c
    43,  // d
    127, // e
    22,  // f
    20,  // g
    61,  // h
    70,  // i
    2,   // j
    8,   // k
    40,  // l
    24,  // m
    67,  // n
    75,  // o
    19,  // p
    1,   // q
    60,  // r
    63,  // s
    91,  // t
    28,  // u
    10,  // v
    24,  // w
    2,   // x
    20,  // y
    1,   // z
]);

impl LetterScoreTable {
    /// Build a table from weights in tenths of a percent
    #[must_use]
    pub const fn new(weights: [u32; ALPHABET_SIZE]) -> Self {
        Self { weights }
    }

    /// Weight of a lowercase letter in tenths of a percent
    ///
    /// Letters outside a-z weigh nothing.
    #[inline]
    #[must_use]
    pub fn score(&self, letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            self.weights[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Weight of a letter as a percentage
    #[must_use]
    pub fn percent(&self, letter: u8) -> f64 {
        f64::from(self.score(letter)) / 10.0
    }

    /// Sum of weights over the word's letter positions
    ///
    /// Repeated letters count once per occurrence.
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Word;
    /// use wordle_hardmode::solver::LETTER_FREQUENCIES;
    ///
    /// // 3 x E (12.7) + R (6.0) + I (7.0)
    /// let eerie = Word::new("eerie").unwrap();
    /// assert_eq!(LETTER_FREQUENCIES.word_score(&eerie), 511);
    /// ```
    #[must_use]
    pub fn word_score(&self, word: &Word) -> u32 {
        word.chars().iter().map(|&c| self.score(c)).sum()
    }

    /// Sum of every weight in the table
    #[must_use]
    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }
}

impl Default for LetterScoreTable {
    fn default() -> Self {
        LETTER_FREQUENCIES.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_about_one_hundred_percent() {
        // The published table is rounded to one decimal and totals 100.3%
        assert_eq!(LETTER_FREQUENCIES.total(), 1003);
    }

    #[test]
    fn weights_within_published_range() {
        for letter in b'a'..=b'z' {
            let pct = LETTER_FREQUENCIES.percent(letter);
            assert!((0.1..=12.7).contains(&pct), "{} = {pct}", letter as char);
        }
    }

    #[test]
    fn known_weights() {
        assert_eq!(LETTER_FREQUENCIES.score(b'e'), 127);
        assert_eq!(LETTER_FREQUENCIES.score(b't'), 91);
        assert_eq!(LETTER_FREQUENCIES.score(b'q'), 1);
        assert!((LETTER_FREQUENCIES.percent(b'a') - 8.2).abs() < 1e-9);
    }

    #[test]
    fn non_letters_score_zero() {
        assert_eq!(LETTER_FREQUENCIES.score(b'A'), 0);
        assert_eq!(LETTER_FREQUENCIES.score(b'!'), 0);
    }

    #[test]
    fn repeated_letters_counted_per_occurrence() {
        let eerie = Word::new("eerie").unwrap();
        let e = LETTER_FREQUENCIES.score(b'e');
        let r = LETTER_FREQUENCIES.score(b'r');
        let i = LETTER_FREQUENCIES.score(b'i');

        assert_eq!(LETTER_FREQUENCIES.word_score(&eerie), 3 * e + r + i);
    }

    #[test]
    fn anagrams_score_identically() {
        let a = Word::new("trace").unwrap();
        let b = Word::new("crate").unwrap();
        assert_eq!(
            LETTER_FREQUENCIES.word_score(&a),
            LETTER_FREQUENCIES.word_score(&b)
        );
    }

    #[test]
    fn default_is_frequency_table() {
        assert_eq!(LetterScoreTable::default(), LETTER_FREQUENCIES);
    }
}
