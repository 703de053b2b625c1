//! Minimax worst-case calculation
//!
//! Given a guess and set of candidates, computes the largest group of
//! candidates that would all return the same feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "0123".parse().unwrap();
/// let candidates: Vec<Code> = ["0123", "4567", "0132"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// // Each candidate gives a different feedback
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    let mut counts = [0usize; Feedback::SLOTS];

    for candidate in candidates {
        counts[Feedback::calculate(guess, candidate).index()] += 1;
    }

    counts.into_iter().max().unwrap_or(0)
}

/// Group candidates by the feedback they produce with the guess
///
/// Returns the bucket sizes keyed by feedback.
#[must_use]
pub fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts
            .entry(Feedback::calculate(guess, candidate))
            .or_insert(0) += 1;
    }

    counts
}
