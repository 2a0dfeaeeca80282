//! Benchmark command
//!
//! Tests solver throughput on a random sample of target words.

use crate::core::Word;
use crate::solver::{GameConfig, LetterScoreTable, play_game};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub solved: usize,
    /// Mean guess count over every game, failures included
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from `words`
///
/// The same seed always yields the same sample.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Run one game per target, one after another
pub fn run_benchmark(
    words: &[Word],
    target_words: &[Word],
    table: &LetterScoreTable,
    config: &GameConfig,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in target_words {
        let result = play_game(words, target, table, config.clone());
        let guesses = result.guess_count;

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        if result.solved {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    if total_words == 0 {
        min_guesses = 0;
    }

    BenchmarkResult {
        total_words,
        total_guesses,
        solved,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
