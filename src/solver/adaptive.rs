//! Adaptive minimax selection
//!
//! Adjusts how much of the candidate set is searched based on its size.

use super::minimax::{par_select_best_guess, select_best_guess};
use super::sampling::sample_pool;
use crate::core::Code;
use rand::Rng;

/// Adaptive minimax selector with configurable search bounds
///
/// Thresholds use a single `>` comparison:
/// ```text
/// if candidates == 1                     → Single
/// else if candidates > full_search_limit → Sampled (pool of sample_size)
/// else                                   → Full (pool = all candidates)
/// ```
///
/// Guesses are always scored against every remaining candidate; only the pool
/// of guesses considered shrinks when sampling.
#[derive(Debug, Clone)]
pub struct AdaptiveSelector {
    /// Candidate sets larger than this are searched through a random sample (default: 1200)
    pub full_search_threshold: usize,

    /// Size of the random guess pool when sampling (default: 800)
    pub sample_size: usize,

    /// Score the pool on the rayon thread pool (default: false)
    pub parallel: bool,
}

impl AdaptiveSelector {
    /// Create a new adaptive selector with custom bounds
    #[must_use]
    pub const fn new(full_search_threshold: usize, sample_size: usize, parallel: bool) -> Self {
        Self {
            full_search_threshold,
            sample_size,
            parallel,
        }
    }

    /// Get the search tier for a candidate set of this size
    #[must_use]
    pub const fn get_tier(&self, num_candidates: usize) -> SearchTier {
        if num_candidates <= 1 {
            SearchTier::Single
        } else if num_candidates > self.full_search_threshold {
            SearchTier::Sampled
        } else {
            SearchTier::Full
        }
    }

    /// Select the next guess from the remaining candidates
    ///
    /// Returns `None` only when `candidates` is empty.
    pub fn select_guess<R: Rng + ?Sized>(&self, candidates: &[Code], rng: &mut R) -> Option<Code> {
        let tier = self.get_tier(candidates.len());

        let pool: Vec<Code> = match tier {
            SearchTier::Single => return candidates.first().copied(),
            SearchTier::Full => candidates.to_vec(),
            SearchTier::Sampled => sample_pool(candidates, self.sample_size, rng),
        };

        tracing::debug!(
            ?tier,
            candidates = candidates.len(),
            pool = pool.len(),
            "selecting next guess"
        );

        let best = if self.parallel {
            par_select_best_guess(&pool, candidates)
        } else {
            select_best_guess(&pool, candidates)
        };

        match best {
            Some((guess, worst_case)) => {
                tracing::trace!(%guess, worst_case, "best guess in pool");
                Some(guess)
            }
            None => candidates.first().copied(),
        }
    }
}

impl Default for AdaptiveSelector {
    fn default() -> Self {
        Self::new(
            1200,  // full_search_threshold: full minimax up to 1200 candidates
            800,   // sample_size: 800 sampled guesses above that
            false, // parallel: sequential scan with early exit
        )
    }
}

/// How much of the candidate set is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTier {
    /// One candidate left: play it
    Single,

    /// Every candidate is a potential guess
    Full,

    /// A random subset of candidates is considered
    Sampled,
}
