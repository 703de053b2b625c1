//! Uniform sampling of the guess pool

use crate::core::Code;
use rand::Rng;
use rand::seq::index;

/// Draw up to `size` candidates uniformly at random, without replacement
///
/// The returned order is the (random) draw order, which determines tie
/// breaking during selection.
pub fn sample_pool<R: Rng + ?Sized>(candidates: &[Code], size: usize, rng: &mut R) -> Vec<Code> {
    let amount = size.min(candidates.len());

    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::all_codes;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn sample_has_requested_size_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool = sample_pool(all_codes(), 800, &mut rng);

        assert_eq!(pool.len(), 800);
        let unique: FxHashSet<Code> = pool.iter().copied().collect();
        assert_eq!(unique.len(), 800);
    }

    #[test]
    fn sample_is_capped_by_candidate_count() {
        let candidates = &all_codes()[..10];
        let mut rng = StdRng::seed_from_u64(11);

        let mut pool = sample_pool(candidates, 800, &mut rng);
        pool.sort();
        assert_eq!(pool, candidates);
    }

    #[test]
    fn sample_draws_only_from_candidates() {
        let candidates = &all_codes()[100..300];
        let mut rng = StdRng::seed_from_u64(5);

        let pool = sample_pool(candidates, 50, &mut rng);
        assert!(pool.iter().all(|c| candidates.contains(c)));
    }

    #[test]
    fn sample_of_empty_set_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_pool(&[], 800, &mut rng).is_empty());
    }
}
