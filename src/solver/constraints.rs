//! Hard-mode constraint tracking and candidate filtering
//!
//! Feedback is folded into fixed-size per-position and per-letter tables:
//! - a position may be pinned to one letter (green)
//! - a position may forbid letters (yellow or gray at that position)
//! - each letter has a minimum count (greens + yellows for it)
//! - a letter with any gray mark has its maximum pinned to that same count
//!
//! A word satisfying every table produces exactly the observed feedback for
//! each recorded guess, and by construction reuses every confirmed letter.

use crate::core::{ALPHABET_SIZE, Feedback, GuessRecord, Mark, WORD_LENGTH, Word, letter_index};

/// Conjunction of every constraint implied by a game's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    pinned: [Option<u8>; WORD_LENGTH],
    /// Bitmask of forbidden letters per position, bit 0 = 'a'
    forbidden: [u32; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
    max_counts: [u8; ALPHABET_SIZE],
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSet {
    /// A constraint set that accepts every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pinned: [None; WORD_LENGTH],
            forbidden: [0; WORD_LENGTH],
            min_counts: [0; ALPHABET_SIZE],
            max_counts: [WORD_LENGTH as u8; ALPHABET_SIZE],
        }
    }

    /// Constraints implied by a whole history
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut constraints = Self::new();
        for record in history {
            constraints.apply(&record.guess, &record.feedback);
        }
        constraints
    }

    /// Fold one guess and its feedback into the set
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        let mut confirmed = [0u8; ALPHABET_SIZE];
        let mut excess = [false; ALPHABET_SIZE];

        for (position, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            let idx = letter_index(letter);
            if mark == Mark::Correct {
                self.pinned[position] = Some(letter);
            } else {
                self.forbidden[position] |= 1 << idx;
            }

            if mark.confirms_letter() {
                confirmed[idx] += 1;
            } else {
                excess[idx] = true;
            }
        }

        for idx in 0..ALPHABET_SIZE {
            self.min_counts[idx] = self.min_counts[idx].max(confirmed[idx]);
            if excess[idx] {
                self.max_counts[idx] = self.max_counts[idx].min(confirmed[idx]);
            }
        }
    }

    /// Check whether `word` satisfies every constraint
    ///
    /// In hard mode this is also the test for whether `word` is a legal guess.
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        let positions_ok = word.chars().iter().enumerate().all(|(position, &letter)| {
            self.pinned[position].is_none_or(|pin| pin == letter)
                && self.forbidden[position] & (1 << letter_index(letter)) == 0
        });

        positions_ok
            && word
                .letter_counts()
                .iter()
                .zip(self.min_counts.iter().zip(&self.max_counts))
                .all(|(&count, (&min, &max))| (min..=max).contains(&count))
    }

    /// Candidates from `candidates` that satisfy every constraint, in order
    #[must_use]
    pub fn filter(&self, candidates: &[Word]) -> Vec<Word> {
        candidates
            .iter()
            .filter(|word| self.permits(word))
            .cloned()
            .collect()
    }

    /// Drop candidates that violate any constraint, in place
    pub fn retain_permitted(&self, candidates: &mut Vec<Word>) {
        let before = candidates.len();
        candidates.retain(|word| self.permits(word));
        log::trace!("constraints kept {} of {before} candidates", candidates.len());
    }

    /// Letter fixed at `position` by a green mark, if any
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn pinned(&self, position: usize) -> Option<u8> {
        self.pinned[position]
    }

    /// Check whether `letter` is ruled out at `position`
    ///
    /// Only `a..=z` can be forbidden; any other byte returns false.
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn forbids(&self, position: usize, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.forbidden[position] & (1 << letter_index(letter)) != 0
    }

    /// Minimum number of times `letter` must appear
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.min_counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Maximum number of times `letter` may appear
    ///
    /// Zero for any byte outside `a..=z`, since no word contains one.
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.max_counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Letters still possible at `position`, alphabetically
    ///
    /// A pinned position allows only its pin. Otherwise a letter is allowed
    /// unless it is forbidden there or capped at zero occurrences.
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn allowed_letters(&self, position: usize) -> Vec<u8> {
        if let Some(pin) = self.pinned[position] {
            return vec![pin];
        }
        (b'a'..=b'z')
            .filter(|&letter| !self.forbids(position, letter) && self.max_count(letter) > 0)
            .collect()
    }

    /// Letters with a confirmed minimum count, as `(letter, min)`
    #[must_use]
    pub fn required_letters(&self) -> Vec<(u8, u8)> {
        (b'a'..=b'z')
            .zip(self.min_counts)
            .filter(|&(_, min)| min > 0)
            .collect()
    }

    /// Letters whose count is capped below the word length, as `(letter, max)`
    #[must_use]
    pub fn capped_letters(&self) -> Vec<(u8, u8)> {
        (b'a'..=b'z')
            .zip(self.max_counts)
            .filter(|&(_, max)| usize::from(max) < WORD_LENGTH)
            .collect()
    }
}

/// Narrow `candidates` to the words consistent with one guess and its feedback
///
/// Returns exactly the candidates that, were they the hidden word, would make
/// `guess` produce `feedback`. An empty input gives an empty output, and
/// self-contradictory feedback simply matches nothing.
///
/// # Examples
/// ```
/// use wordle_hardmode::core::{Feedback, Word};
/// use wordle_hardmode::solver::filter;
///
/// let words: Vec<Word> = ["crane", "slate", "trace", "plate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("slate").unwrap();
/// let feedback: Feedback = "--GYG".parse().unwrap();
///
/// let remaining = filter(&words, &guess, &feedback);
/// assert_eq!(remaining, vec![Word::new("trace").unwrap()]);
/// ```
#[must_use]
pub fn filter(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let mut constraints = ConstraintSet::new();
    constraints.apply(guess, feedback);
    constraints.filter(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn empty_constraints_permit_everything() {
        let constraints = ConstraintSet::new();
        for w in words(&["crane", "eerie", "zzzzz"]) {
            assert!(constraints.permits(&w));
        }
    }

    #[test]
    fn green_pins_position() {
        let feedback: Feedback = "G----".parse().unwrap();
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("crane"), &feedback);

        assert_eq!(constraints.pinned(0), Some(b'c'));
        assert_eq!(constraints.pinned(1), None);
        assert!(constraints.permits(&word("cloud")));
        assert!(!constraints.permits(&word("bloom")));
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let feedback: Feedback = "Y----".parse().unwrap();
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("crane"), &feedback);

        assert_eq!(constraints.min_count(b'c'), 1);
        assert!(constraints.forbids(0, b'c'));
        // Must reuse C, but not at position 0
        assert!(!constraints.permits(&word("joist")));
        assert!(constraints.permits(&word("mulch")));
        assert!(!constraints.permits(&word("cloud")));
    }

    #[test]
    fn gray_without_confirmation_excludes_letter() {
        let feedback: Feedback = "-----".parse().unwrap();
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("crane"), &feedback);

        for letter in *b"crane" {
            assert_eq!(constraints.max_count(letter), 0);
        }
        assert!(constraints.permits(&word("pilot")));
        assert!(!constraints.permits(&word("torch")));
    }

    #[test]
    fn gray_duplicate_caps_count() {
        // SPEED against ERASE: both E's yellow, so E appears at least twice
        // but not at positions 2 or 3; P and D are out entirely.
        let feedback: Feedback = "Y-YY-".parse().unwrap();
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("speed"), &feedback);

        assert_eq!(constraints.min_count(b'e'), 2);
        assert_eq!(constraints.max_count(b'e'), 5);
        assert_eq!(constraints.max_count(b'p'), 0);
        assert_eq!(constraints.max_count(b'd'), 0);

        let kept = filter(
            &words(&["erase", "verse", "geese", "reset", "crane"]),
            &word("speed"),
            &feedback,
        );
        assert_eq!(kept, words(&["erase", "verse"]));
    }

    #[test]
    fn gray_after_yellow_sets_exact_count() {
        // ALLOY against LLAMA: one A confirmed, the second L green, the first
        // L yellow. O and Y are out.
        let feedback: Feedback = "YGY--".parse().unwrap();
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("alloy"), &feedback);

        assert_eq!(constraints.min_count(b'l'), 2);
        assert_eq!(constraints.min_count(b'a'), 1);
        assert_eq!(constraints.pinned(1), Some(b'l'));
        assert!(constraints.permits(&word("llama")));
        assert!(!constraints.permits(&word("allay")));
    }

    #[test]
    fn exact_count_rejects_extra_copies() {
        // EERIE against THERE: two E's confirmed, the third gray
        let guess = word("eerie");
        let feedback = Feedback::evaluate(&guess, &word("there"));
        let mut constraints = ConstraintSet::new();
        constraints.apply(&guess, &feedback);

        assert_eq!(constraints.min_count(b'e'), 2);
        assert_eq!(constraints.max_count(b'e'), 2);
        assert!(constraints.permits(&word("there")));
    }

    #[test]
    fn matches_feedback_simulation() {
        let pool = words(&[
            "crane", "slate", "trace", "plate", "eerie", "there", "speed", "erase", "verse",
            "geese", "alloy", "llama", "allay", "label", "robot", "floor", "ledge", "elite",
        ]);

        for guess in &pool {
            for target in &pool {
                let feedback = Feedback::evaluate(guess, target);
                let expected: Vec<Word> = pool
                    .iter()
                    .filter(|w| Feedback::evaluate(guess, w) == feedback)
                    .cloned()
                    .collect();

                assert_eq!(
                    filter(&pool, guess, &feedback),
                    expected,
                    "guess {guess} target {target} feedback {feedback}"
                );
            }
        }
    }

    #[test]
    fn accumulates_across_history() {
        let target = word("trace");
        let history = vec![
            GuessRecord::scored(word("slate"), &target),
            GuessRecord::scored(word("crane"), &target),
        ];
        let constraints = ConstraintSet::from_history(&history);

        assert_eq!(constraints.max_count(b's'), 0);
        assert_eq!(constraints.max_count(b'n'), 0);
        assert_eq!(constraints.min_count(b't'), 1);
        assert_eq!(constraints.min_count(b'c'), 1);
        assert!(constraints.permits(&target));
        assert!(!constraints.permits(&word("crate")));
    }

    #[test]
    fn non_letter_bytes_are_not_constrained() {
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("crane"), &"-Y-G-".parse().unwrap());

        for byte in [b'A', b'R', b'0', b'{', 0, 255] {
            for position in 0..WORD_LENGTH {
                assert!(!constraints.forbids(position, byte));
            }
            assert_eq!(constraints.min_count(byte), 0);
            assert_eq!(constraints.max_count(byte), 0);
        }
    }

    #[test]
    fn domains_after_one_guess() {
        // SLATE against TRACE
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("slate"), &"--GYG".parse().unwrap());

        assert_eq!(constraints.allowed_letters(2), b"a");
        assert_eq!(constraints.allowed_letters(4), b"e");

        let third = constraints.allowed_letters(3);
        assert_eq!(third.len(), 23);
        assert!(!third.contains(&b't'));
        assert!(!third.contains(&b's'));
        assert!(!third.contains(&b'l'));

        let first = constraints.allowed_letters(0);
        assert_eq!(first.len(), 24);
        assert!(first.contains(&b't'));

        assert_eq!(
            constraints.required_letters(),
            [(b'a', 1), (b'e', 1), (b't', 1)]
        );
        assert_eq!(constraints.capped_letters(), [(b'l', 0), (b's', 0)]);
    }

    #[test]
    fn retain_matches_filter() {
        let pool = words(&["crane", "slate", "trace", "plate", "caret", "react"]);
        let mut constraints = ConstraintSet::new();
        constraints.apply(&word("crane"), &Feedback::evaluate(&word("crane"), &word("trace")));

        let mut retained = pool.clone();
        constraints.retain_permitted(&mut retained);

        assert_eq!(retained, constraints.filter(&pool));
        assert_eq!(retained, words(&["trace"]));
    }

    #[test]
    fn empty_candidates_filter_to_empty() {
        let feedback: Feedback = "GGGGG".parse().unwrap();
        assert!(filter(&[], &word("crane"), &feedback).is_empty());
    }

    #[test]
    fn contradictory_feedback_matches_nothing() {
        // Three E's that may only sit at positions 2 and 3
        let feedback: Feedback = "YYYYY".parse().unwrap();
        let pool = words(&["eerie", "there", "geese", "erase", "reset"]);
        assert!(filter(&pool, &word("eerie"), &feedback).is_empty());
    }
}
