//! Display functions for command results

use super::formatters::{format_letter_counts, format_letters, format_score, score_bar};
use crate::commands::{BenchmarkResult, ScoreAnalysis, SolveResult, TestAllStatistics};
use crate::core::WORD_LENGTH;
use crate::solver::ConstraintSet;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Score:      {}", format_score(step.score));
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            print_constraints(&step.constraints);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Allowed letters per position and the letter count bounds
fn print_constraints(constraints: &ConstraintSet) {
    for position in 0..WORD_LENGTH {
        let allowed = constraints.allowed_letters(position);
        let letters = format_letters(&allowed);
        if constraints.pinned(position).is_some() {
            println!("  Position {}: {}", position + 1, letters.green().bold());
        } else {
            println!("  Position {}: {}", position + 1, letters.bright_black());
        }
    }
    println!(
        "  Min counts: {}",
        format_letter_counts(&constraints.required_letters())
    );
    println!(
        "  Max counts: {}",
        format_letter_counts(&constraints.capped_letters())
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &ScoreAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔤 Letters:");
    for (letter, weight) in &result.letters {
        println!(
            "   {}  {:>5}%",
            letter.to_ascii_uppercase(),
            format_score(*weight)
        );
    }

    let best = result.top.first().map_or(result.score, |(_, s)| *s);
    println!(
        "\n   Total:  [{}] {}",
        score_bar(result.score, best.max(result.score), 30).green(),
        format_score(result.score).bright_yellow()
    );

    match result.rank {
        Some(rank) => println!("   Rank:   {rank} of {}", result.total_words),
        None => println!("   Rank:   {}", "not in word list".yellow()),
    }

    if !result.top.is_empty() {
        println!("\n🏆 {}", "Top words:".bright_cyan().bold());
        for (i, (word, score)) in result.top.iter().enumerate() {
            println!(
                "   {:>2}. {} {}",
                i + 1,
                word.to_uppercase(),
                format_score(*score)
            );
        }
    }
}

fn print_distribution(distribution: &FxHashMap<usize, usize>, total: usize) {
    let max_count = distribution.values().copied().max().unwrap_or(0);
    let max_key = distribution.keys().copied().max().unwrap_or(0).max(6);

    for guess_count in 1..=max_key {
        let count = distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let bar_width = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.total_words);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solve_rate()).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", 100.0 - stats.solve_rate()).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_words > 0 {
        println!(
            "  Time per word:       {:.2}ms",
            stats.total_time.as_secs_f64() * 1000.0 / stats.total_words as f64
        );
    }
    if let Some((word, duration)) = &stats.slowest_word {
        println!(
            "  Slowest word:        {} ({:.2}ms)",
            word.to_uppercase(),
            duration.as_secs_f64() * 1000.0
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n💥 {}", "Failed Words".red().bold());
        for word in stats.failed_words.iter().take(20) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 20 {
            println!("  ... and {} more", stats.failed_words.len() - 20);
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));

    for (word, count) in first_guesses.iter().take(5) {
        let percentage = **count as f64 / stats.total_words as f64 * 100.0;
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            percentage
        );
    }
}
