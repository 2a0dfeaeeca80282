//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Both paths drop invalid entries and duplicates, keeping first-seen order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are ignored; lines that are not valid words are skipped with a
/// warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_hardmode::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = parse_words(content.lines().map(str::trim).filter(|line| !line.is_empty()));
    log::info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_hardmode::wordlists::loader::words_from_slice;
/// use wordle_hardmode::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_words(slice.iter().copied())
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();

    lines
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping word list entry '{line}': {e}");
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
