//! Word analysis command
//!
//! Breaks a word's letter-frequency score down by letter and ranks it
//! against the word list.

use crate::core::{Word, WordleError};
use crate::solver::{LetterScoreTable, rank};

/// Result of analyzing a word
pub struct ScoreAnalysis {
    pub word: String,
    /// Total score in tenths of a percent
    pub score: u32,
    /// Each letter with its weight, in word order
    pub letters: Vec<(char, u32)>,
    /// 1-based position among the word list, if the word is in it
    pub rank: Option<usize>,
    pub total_words: usize,
    /// Best-scoring words in the list
    pub top: Vec<(String, u32)>,
}

/// Analyze the score of a word against a word list
///
/// # Errors
///
/// Returns an error if the word is invalid (not 5 letters or not a-z).
pub fn analyze_word(
    word: &str,
    words: &[Word],
    table: &LetterScoreTable,
    top: usize,
) -> Result<ScoreAnalysis, WordleError> {
    let word_obj = Word::new(word)?;

    let letters = word_obj
        .chars()
        .iter()
        .map(|&c| (char::from(c), table.score(c)))
        .collect();

    let ranked = rank(words, table);
    let position = ranked
        .iter()
        .position(|(w, _)| *w == &word_obj)
        .map(|i| i + 1);

    Ok(ScoreAnalysis {
        word: word_obj.text().to_string(),
        score: table.word_score(&word_obj),
        letters,
        rank: position,
        total_words: words.len(),
        top: ranked
            .iter()
            .take(top)
            .map(|(w, s)| (w.text().to_string(), *s))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LETTER_FREQUENCIES;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(&["crane", "slate", "trace", "plate"]);

        let result = analyze_word("TRACE", &words, &LETTER_FREQUENCIES, 2).unwrap();

        assert_eq!(result.word, "trace");
        assert_eq!(result.score, 388);
        assert_eq!(result.rank, Some(2));
        assert_eq!(result.total_words, 4);
        assert_eq!(
            result.top,
            [("slate".to_string(), 403), ("trace".to_string(), 388)]
        );
    }

    #[test]
    fn analyze_letter_breakdown() {
        let words = words_from_slice(&["eerie"]);
        let result = analyze_word("eerie", &words, &LETTER_FREQUENCIES, 5).unwrap();

        assert_eq!(
            result.letters,
            [('e', 127), ('e', 127), ('r', 60), ('i', 70), ('e', 127)]
        );
        assert_eq!(result.score, result.letters.iter().map(|(_, s)| s).sum::<u32>());
        assert_eq!(result.rank, Some(1));
    }

    #[test]
    fn analyze_word_outside_list() {
        let words = words_from_slice(&["crane", "slate"]);
        let result = analyze_word("zebra", &words, &LETTER_FREQUENCIES, 5).unwrap();

        assert_eq!(result.rank, None);
        assert_eq!(result.top.len(), 2);
    }

    #[test]
    fn analyze_invalid_word() {
        let words = words_from_slice(&["crane"]);
        let result = analyze_word("abc", &words, &LETTER_FREQUENCIES, 5);

        assert!(matches!(result, Err(WordleError::InvalidWordLength(3))));
    }
}
