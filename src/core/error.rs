//! Error taxonomy for the solver core

use thiserror::Error;

/// Errors surfaced by the solver core
///
/// Malformed input is rejected before any filtering or scoring runs.
/// Running out of attempts is not an error; it is [`GameState::Failed`].
///
/// [`GameState::Failed`]: crate::solver::GameState::Failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidWordLength(usize),
    #[error("word '{0}' must contain only the letters a-z")]
    InvalidCharacters(String),
    #[error("feedback must have exactly 5 marks, got {0}")]
    InvalidFeedbackLength(usize),
    #[error("invalid feedback mark '{0}' (use G, Y or -)")]
    InvalidMark(char),
    #[error("no candidate words remain")]
    EmptyCandidateSet,
    #[error("the game is already over")]
    GameOver,
}
