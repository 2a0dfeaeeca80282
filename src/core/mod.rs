//! Core domain types for Wordle
//!
//! Words, feedback marks and the feedback rule itself. Everything here is
//! plain data with no knowledge of scoring or game flow.

mod error;
mod feedback;
mod word;

pub use error::WordleError;
pub use feedback::{Feedback, GuessRecord, Mark};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word};
pub(crate) use word::letter_index;
