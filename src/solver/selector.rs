//! Letter-frequency guess selection
//!
//! Every candidate is scored by summing the table weight of each of its
//! letters. The highest score wins; ties go to the lexicographically
//! smallest word. How a guess would split the remaining candidates is never
//! considered.

use super::LetterScoreTable;
use crate::core::{Word, WordleError};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Strict ranking order: higher score first, then alphabetical
fn rank_order(a: &(&Word, u32), b: &(&Word, u32)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Select the next guess from the remaining candidates
///
/// # Errors
/// Returns `EmptyCandidateSet` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_hardmode::core::Word;
/// use wordle_hardmode::solver::{LETTER_FREQUENCIES, select};
///
/// let candidates: Vec<Word> = ["crane", "slate", "trace", "plate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = select(&candidates, &LETTER_FREQUENCIES).unwrap();
/// assert_eq!(guess.text(), "slate");
/// ```
pub fn select<'a>(
    candidates: &'a [Word],
    table: &LetterScoreTable,
) -> Result<&'a Word, WordleError> {
    candidates
        .par_iter()
        .map(|word| (word, table.word_score(word)))
        .min_by(rank_order)
        .map(|(word, _)| word)
        .ok_or(WordleError::EmptyCandidateSet)
}

/// All candidates with their scores, best first
///
/// The first entry is always the word [`select`] returns.
#[must_use]
pub fn rank<'a>(candidates: &'a [Word], table: &LetterScoreTable) -> Vec<(&'a Word, u32)> {
    let mut ranked: Vec<(&Word, u32)> = candidates
        .par_iter()
        .map(|word| (word, table.word_score(word)))
        .collect();
    ranked.par_sort_unstable_by(rank_order);
    ranked
}
