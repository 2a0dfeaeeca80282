//! Wordle word representation
//!
//! A Word stores a 5-letter word along with per-letter counts used by the
//! feedback rule and the hard-mode constraint checks.

use super::WordleError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet (a-z)
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter Wordle word, normalized to lowercase
///
/// Ordering is lexicographic on the letters, which is what the guess selector
/// relies on to break score ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    counts: [u8; ALPHABET_SIZE],
}

/// Index of a lowercase ASCII letter in `0..26`
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordleError` if:
    /// - Length is not exactly 5 (`InvalidWordLength`)
    /// - Any character is outside a-z after lowercasing (`InvalidCharacters`)
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordleError> {
        let text: String = text.into().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::InvalidWordLength(length));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacters(text));
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &chars {
            counts[letter_index(ch)] += 1;
        }

        Ok(Self {
            text,
            chars,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` appears in the word
    ///
    /// Bytes outside `a..=z` never appear, so they count as zero.
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Per-letter occurrence counts, indexed `a = 0 .. z = 25`
    #[inline]
    pub(crate) const fn letter_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
