//! Test all words - comprehensive solver evaluation
//!
//! Runs the solver against every word in the list and generates statistics.
//! Games are independent, so they run in parallel by default.

use crate::core::Word;
use crate::solver::{GameConfig, LetterScoreTable, play_game};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for a full evaluation run
#[derive(Debug, Clone)]
pub struct TestAllConfig {
    pub limit: Option<usize>,
    pub game: GameConfig,
    pub parallel: bool,
    pub show_progress: bool,
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self {
            limit: None,
            game: GameConfig::default(),
            parallel: true,
            show_progress: true,
        }
    }
}

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    /// Mean guess count over solved games
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub first_guess_used: FxHashMap<String, usize>,
    /// Word whose game took longest, with its time
    pub slowest_word: Option<(String, Duration)>,
}

impl TestAllStatistics {
    /// Percentage of games solved within the attempt budget
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style.progress_chars("█▓▒░"));
    pb
}

fn test_word(
    target: &Word,
    words: &[Word],
    table: &LetterScoreTable,
    config: &GameConfig,
) -> WordTestResult {
    let start = Instant::now();
    let result = play_game(words, target, table, config.clone());

    WordTestResult {
        word: target.text().to_string(),
        guesses: result
            .guesses
            .iter()
            .map(|r| r.guess.text().to_string())
            .collect(),
        num_guesses: result.guess_count,
        success: result.solved,
        duration: start.elapsed(),
    }
}

/// Run the solver with every word (or the first `limit` words) as target
///
/// Every game yields exactly one verdict; a game that runs out of candidates
/// or attempts counts as failed and the run continues.
pub fn run_test_all(
    words: &[Word],
    table: &LetterScoreTable,
    config: &TestAllConfig,
) -> TestAllStatistics {
    let targets = &words[..config.limit.unwrap_or(words.len()).min(words.len())];
    log::info!(
        "testing {} targets over {} words (parallel: {})",
        targets.len(),
        words.len(),
        config.parallel
    );

    let pb = progress_bar(targets.len(), config.show_progress);
    let total_start = Instant::now();

    let run = |target: &Word| {
        let result = test_word(target, words, table, &config.game);
        pb.inc(1);
        result
    };

    let results: Vec<WordTestResult> = if config.parallel {
        targets.par_iter().map(run).collect()
    } else {
        targets.iter().map(run).collect()
    };

    pb.finish_with_message("Complete!");
    let stats = summarize(&results, total_start.elapsed());
    log::info!(
        "solved {}/{} in {:.2}s",
        stats.solved,
        stats.total_words,
        stats.total_time.as_secs_f64()
    );
    stats
}

/// Aggregate per-word results
#[must_use]
pub fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_guess_used: FxHashMap<String, usize> = FxHashMap::default();

    for result in results {
        if result.success {
            *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
        }
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
    }

    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses >= 5)
        .map(|r| (r.word.clone(), r.num_guesses))
        .collect();
    worst_words.sort_by(|(wa, na), (wb, nb)| nb.cmp(na).then_with(|| wa.cmp(wb)));
    worst_words.truncate(10);

    let failed_words: Vec<String> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.word.clone())
        .collect();

    let slowest_word = results
        .iter()
        .max_by(|a, b| a.duration.cmp(&b.duration).then_with(|| b.word.cmp(&a.word)))
        .map(|r| (r.word.clone(), r.duration));

    TestAllStatistics {
        total_words: results.len(),
        solved: solved_count,
        failed: failed_words.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_words,
        failed_words,
        first_guess_used,
        slowest_word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LETTER_FREQUENCIES;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(limit: Option<usize>, parallel: bool) -> TestAllConfig {
        TestAllConfig {
            limit,
            parallel,
            show_progress: false,
            ..TestAllConfig::default()
        }
    }

    #[test]
    fn every_word_gets_one_verdict() {
        let words = words_from_slice(&ANSWERS[..200]);
        let stats = run_test_all(&words, &LETTER_FREQUENCIES, &quiet(None, true));

        assert_eq!(stats.total_words, 200);
        assert_eq!(stats.solved + stats.failed, stats.total_words);
        assert_eq!(stats.failed_words.len(), stats.failed);

        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn parallel_matches_sequential() {
        let words = words_from_slice(&ANSWERS[..150]);
        let parallel = run_test_all(&words, &LETTER_FREQUENCIES, &quiet(Some(60), true));
        let sequential = run_test_all(&words, &LETTER_FREQUENCIES, &quiet(Some(60), false));

        assert_eq!(parallel.total_words, 60);
        assert_eq!(parallel.solved, sequential.solved);
        assert_eq!(parallel.failed_words, sequential.failed_words);
        assert_eq!(parallel.guess_distribution, sequential.guess_distribution);
        assert!((parallel.average_guesses - sequential.average_guesses).abs() < 1e-12);
    }

    #[test]
    fn first_guess_is_shared_without_opening() {
        let words = words_from_slice(&ANSWERS[..100]);
        let stats = run_test_all(&words, &LETTER_FREQUENCIES, &quiet(None, true));

        // The first guess depends only on the word list
        assert_eq!(stats.first_guess_used.len(), 1);
    }

    #[test]
    fn limit_larger_than_list_is_clamped() {
        let words = words_from_slice(&["crane", "slate", "trace", "plate"]);
        let stats = run_test_all(&words, &LETTER_FREQUENCIES, &quiet(Some(100), false));

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved, 4);
        assert!(stats.min_guesses >= 1);
        assert!(stats.max_guesses <= 6);
        assert!((stats.solve_rate() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn summarize_counts_failures() {
        let result = |word: &str, n: usize, success: bool| WordTestResult {
            word: word.to_string(),
            guesses: vec!["slate".to_string(); n],
            num_guesses: n,
            success,
            duration: Duration::from_millis(n as u64),
        };
        let results = vec![
            result("trace", 2, true),
            result("hills", 6, false),
            result("eerie", 5, true),
            result("crane", 3, true),
        ];

        let stats = summarize(&results, Duration::from_secs(1));

        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed_words, ["hills"]);
        assert!((stats.average_guesses - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.min_guesses, 2);
        assert_eq!(stats.max_guesses, 5);
        assert_eq!(stats.worst_words, [("eerie".to_string(), 5)]);
        assert_eq!(stats.first_guess_used.get("slate"), Some(&4));
        assert_eq!(
            stats.slowest_word,
            Some(("hills".to_string(), Duration::from_millis(6)))
        );
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.solve_rate().abs() < f64::EPSILON);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert_eq!(stats.slowest_word, None);
    }
}
