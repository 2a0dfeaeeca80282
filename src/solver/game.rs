//! Hard-mode game state machine
//!
//! A game starts `InProgress` with the full word list as candidates. Each
//! turn selects a guess, records its feedback, and either ends the game or
//! narrows the candidates. `Solved` and `Failed` are terminal.

use super::{ConstraintSet, LetterScoreTable, select};
use crate::core::{Feedback, GuessRecord, Word, WordleError};

/// Standard Wordle attempt budget
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Per-game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// Forced first guess; when `None` the selector picks turn one too
    pub opening: Option<Word>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            opening: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening = opening;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Solved,
    Failed,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub solved: bool,
    pub guess_count: usize,
    pub guesses: Vec<GuessRecord>,
}

/// One hard-mode game
pub struct Game<'t> {
    table: &'t LetterScoreTable,
    config: GameConfig,
    candidates: Vec<Word>,
    constraints: ConstraintSet,
    history: Vec<GuessRecord>,
    state: GameState,
}

impl<'t> Game<'t> {
    /// Start a game over `words`
    ///
    /// The word list is sorted and deduplicated to form the initial
    /// candidate set.
    #[must_use]
    pub fn new(words: &[Word], table: &'t LetterScoreTable, config: GameConfig) -> Self {
        let mut candidates = words.to_vec();
        candidates.sort_unstable();
        candidates.dedup();

        let state = if config.max_attempts == 0 {
            GameState::Failed
        } else {
            GameState::InProgress
        };

        Self {
            table,
            config,
            candidates,
            constraints: ConstraintSet::new(),
            history: Vec::new(),
            state,
        }
    }

    /// The guess the solver would submit next
    ///
    /// # Errors
    /// - `GameOver` if the game has already ended
    /// - `EmptyCandidateSet` if no consistent candidate remains
    pub fn next_guess(&self) -> Result<&Word, WordleError> {
        if self.state.is_terminal() {
            return Err(WordleError::GameOver);
        }

        if self.history.is_empty()
            && let Some(opening) = &self.config.opening
        {
            return Ok(opening);
        }

        select(&self.candidates, self.table)
    }

    /// Record a submitted guess and the feedback it received
    ///
    /// Feedback can come from anywhere (a known target, or a human reading
    /// the board). Returns the state after the turn.
    ///
    /// # Errors
    /// Returns `GameOver` if the game has already ended.
    pub fn record(&mut self, guess: Word, feedback: Feedback) -> Result<GameState, WordleError> {
        if self.state.is_terminal() {
            return Err(WordleError::GameOver);
        }

        let before = self.candidates.len();
        self.constraints.apply(&guess, &feedback);
        self.constraints.retain_permitted(&mut self.candidates);
        log::debug!(
            "turn {}: {guess} {feedback} -> {} of {before} candidates",
            self.history.len() + 1,
            self.candidates.len()
        );
        self.history.push(GuessRecord::new(guess, feedback));

        self.state = if feedback.is_solved() {
            GameState::Solved
        } else if self.candidates.is_empty() {
            log::warn!(
                "no candidates remain after {} guesses; word list lacks the target or feedback is inconsistent",
                self.history.len()
            );
            GameState::Failed
        } else if self.history.len() >= self.config.max_attempts {
            GameState::Failed
        } else {
            GameState::InProgress
        };

        Ok(self.state)
    }

    /// Play one turn against a known target
    ///
    /// An empty candidate set ends the game as `Failed` rather than erroring.
    ///
    /// # Errors
    /// Returns `GameOver` if the game has already ended.
    pub fn play_turn(&mut self, target: &Word) -> Result<GameState, WordleError> {
        let guess = match self.next_guess() {
            Ok(guess) => guess.clone(),
            Err(WordleError::EmptyCandidateSet) => {
                self.state = GameState::Failed;
                return Ok(self.state);
            }
            Err(e) => return Err(e),
        };

        let feedback = Feedback::evaluate(&guess, target);
        self.record(guess, feedback)
    }

    /// Play turns until the game ends
    #[must_use]
    pub fn play(mut self, target: &Word) -> GameResult {
        while !self.state.is_terminal() {
            if self.play_turn(target).is_err() {
                break;
            }
        }
        self.into_result()
    }

    #[must_use]
    pub fn into_result(self) -> GameResult {
        GameResult {
            solved: self.state == GameState::Solved,
            guess_count: self.history.len(),
            guesses: self.history,
        }
    }

    /// Check whether `word` is a legal hard-mode guess right now
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.constraints.permits(word)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }
}

/// Run one full game of `target` over `words`
///
/// # Examples
/// ```
/// use wordle_hardmode::core::Word;
/// use wordle_hardmode::solver::{GameConfig, LETTER_FREQUENCIES, play_game};
///
/// let words: Vec<Word> = ["crane", "slate", "trace", "plate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let target = Word::new("trace").unwrap();
///
/// let result = play_game(&words, &target, &LETTER_FREQUENCIES, GameConfig::default());
/// assert!(result.solved);
/// assert_eq!(result.guess_count, 2);
/// ```
#[must_use]
pub fn play_game(
    words: &[Word],
    target: &Word,
    table: &LetterScoreTable,
    config: GameConfig,
) -> GameResult {
    Game::new(words, table, config).play(target)
}
