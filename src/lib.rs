//! Hard Mode Wordle Solver
//!
//! Picks each guess by summing static letter-frequency weights over the
//! remaining candidates, and narrows candidates with count-based constraints
//! so that every guess is legal under Hard Mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hardmode::core::{Feedback, Word};
//! use wordle_hardmode::solver::{LETTER_FREQUENCIES, filter, select};
//!
//! let words: Vec<Word> = ["crane", "slate", "trace", "plate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let guess = select(&words, &LETTER_FREQUENCIES).unwrap();
//! let feedback = Feedback::evaluate(guess, &Word::new("trace").unwrap());
//! let remaining = filter(&words, guess, &feedback);
//! assert_eq!(remaining.len(), 1);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
