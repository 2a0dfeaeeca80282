//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Feedback, Word, WordleError};
use crate::solver::{ConstraintSet, Game, GameConfig, LetterScoreTable};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    /// Letter-frequency score in tenths of a percent
    pub score: u32,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Accumulated constraints once this guess is applied
    pub constraints: ConstraintSet,
}

/// Solve a specific word over `words`
///
/// The target does not have to be in `words`; if it is missing the game
/// ends `Failed` once the candidates run out.
///
/// # Errors
///
/// Returns an error if the target word is not a valid 5-letter word.
pub fn solve_word(
    config: SolveConfig,
    words: &[Word],
    table: &LetterScoreTable,
) -> Result<SolveResult, WordleError> {
    let target_word = Word::new(config.target.as_str())?;

    let mut game = Game::new(words, table, config.game);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !game.state().is_terminal() {
        let candidates_before = game.candidates().len();
        game.play_turn(&target_word)?;

        if let Some(record) = game.history().get(guesses.len()) {
            guesses.push(GuessStep {
                word: record.guess.text().to_string(),
                feedback: record.feedback,
                score: table.word_score(&record.guess),
                candidates_before,
                candidates_after: game.candidates().len(),
                constraints: game.constraints().clone(),
            });
        }
    }

    Ok(SolveResult {
        success: game.into_result().solved,
        guesses,
        target: target_word.text().to_string(),
    })
}
