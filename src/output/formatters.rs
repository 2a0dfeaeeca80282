//! Formatting utilities for terminal output

/// Render a score stored in tenths of a percent, e.g. `403` as `40.3`
#[must_use]
pub fn format_score(score: u32) -> String {
    format!("{}.{}", score / 10, score % 10)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score bar scaled against the best score on display
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}

/// Uppercase a run of letters, e.g. `b"ace"` as `ACE`
#[must_use]
pub fn format_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&b| char::from(b).to_ascii_uppercase())
        .collect()
}

/// Render `(letter, count)` pairs as `A=1 E=1`, or `-` when empty
#[must_use]
pub fn format_letter_counts(counts: &[(u8, u8)]) -> String {
    if counts.is_empty() {
        return "-".to_string();
    }
    counts
        .iter()
        .map(|&(letter, count)| format!("{}={count}", char::from(letter).to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
