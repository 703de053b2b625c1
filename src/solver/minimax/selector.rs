//! Minimax-based guess selection
//!
//! Picks the pool entry with the smallest worst-case bucket. Ties go to the
//! earliest entry in pool order.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Scans the pool in order and keeps the first strict improvement. Stops as
/// soon as a guess reaches a worst case of 1, since nothing can beat it.
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let pool: Vec<Code> = ["4567", "0123"].iter().map(|s| s.parse().unwrap()).collect();
/// let candidates: Vec<Code> = ["0123", "0132"].iter().map(|s| s.parse().unwrap()).collect();
///
/// let (best, worst) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "0123");
/// assert_eq!(worst, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    let mut best: Option<(Code, usize)> = None;

    for guess in guess_pool {
        let max_remaining = calculate_max_remaining(guess, candidates);

        if best.is_none_or(|(_, current)| max_remaining < current) {
            best = Some((*guess, max_remaining));
            if max_remaining <= 1 {
                break;
            }
        }
    }

    best
}

/// Parallel variant of [`select_best_guess`]
///
/// Scores the pool on the rayon thread pool. Returns the same guess as the
/// sequential scan: the earliest pool entry with the minimum worst case.
#[must_use]
pub fn par_select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(idx, guess)| (idx, *guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|&(idx, _, max)| (max, idx))
        .map(|(_, guess, max)| (guess, max))
}
