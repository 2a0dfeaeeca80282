//! Word lists for Wordle solving
//!
//! Provides the embedded default word list and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
