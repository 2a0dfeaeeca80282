//! Wordle feedback marks and the feedback rule
//!
//! Feedback is an ordered array of five marks, one per guess position:
//! - Absent (gray): the letter is not in the word, or every copy is already accounted for
//! - Present (yellow): the letter is in the word at a different position
//! - Correct (green): the letter is at this position

use super::word::letter_index;
use super::{ALPHABET_SIZE, WORD_LENGTH, Word, WordleError};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Gray
    Absent,
    /// Yellow
    Present,
    /// Green
    Correct,
}

impl Mark {
    /// Parse a single mark character
    ///
    /// Accepts `G`/🟩 for green, `Y`/🟨 for yellow and `-`/`_`/`B`/⬜/⬛ for gray,
    /// case-insensitively.
    ///
    /// # Errors
    /// Returns `InvalidMark` for any other character.
    pub fn from_char(c: char) -> Result<Self, WordleError> {
        match c {
            'G' | 'g' | '🟩' => Ok(Self::Correct),
            'Y' | 'y' | '🟨' => Ok(Self::Present),
            '-' | '_' | 'B' | 'b' | '⬜' | '⬛' => Ok(Self::Absent),
            other => Err(WordleError::InvalidMark(other)),
        }
    }

    /// Letter form used by `Display` (`G`, `Y` or `-`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square form
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// True for Correct and Present, the marks that confirm a letter
    #[inline]
    #[must_use]
    pub const fn confirms_letter(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Build feedback from a slice of marks
    ///
    /// # Errors
    /// Returns `InvalidFeedbackLength` unless the slice holds exactly 5 marks.
    pub fn from_marks(marks: &[Mark]) -> Result<Self, WordleError> {
        let marks: [Mark; WORD_LENGTH] = marks
            .try_into()
            .map_err(|_| WordleError::InvalidFeedbackLength(marks.len()))?;
        Ok(Self(marks))
    }

    /// Compute the feedback for `guess` when `target` is the hidden word
    ///
    /// For a letter appearing k times in the guess and m times in the target,
    /// exactly min(k, m) occurrences are marked Correct or Present. Correct
    /// marks are assigned first; the remaining copies go to the leftmost
    /// non-green occurrences as Present, and any excess is Absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&guess, &target).to_string(), "Y-YY-");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET_SIZE];

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                marks[i] = Mark::Correct;
            } else {
                unmatched[letter_index(t)] += 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Correct {
                continue;
            }
            let available = &mut unmatched[letter_index(g)];
            if *available > 0 {
                *mark = Mark::Present;
                *available -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of green marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    /// Number of yellow marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to a string of colored squares
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Feedback;
    ///
    /// let f: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(Mark::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_marks(&marks)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// One submitted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Record the feedback `guess` gets against `target`
    #[must_use]
    pub fn scored(guess: Word, target: &Word) -> Self {
        let feedback = Feedback::evaluate(&guess, target);
        Self { guess, feedback }
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}
