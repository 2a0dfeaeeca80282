//! Hard-mode solving
//!
//! Letter-frequency guess selection, count-based constraint filtering and the
//! per-game state machine that ties them together.

mod constraints;
mod game;
mod scores;
mod selector;

pub use constraints::{ConstraintSet, filter};
pub use game::{DEFAULT_MAX_ATTEMPTS, Game, GameConfig, GameResult, GameState, play_game};
pub use scores::{LETTER_FREQUENCIES, LetterScoreTable};
pub use selector::{rank, select};
