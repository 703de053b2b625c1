//! Benchmark command
//!
//! Tests solver performance across a random selection of secrets.

use super::solve::{DEFAULT_MAX_ATTEMPTS, solve_secret};
use crate::core::{Code, all_codes};
use crate::solver::{SolverConfig, sample_pool};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Pick `count` distinct secrets from the code space
///
/// A fixed `seed` always yields the same secrets.
#[must_use]
pub fn random_secrets(count: usize, seed: Option<u64>) -> Vec<Code> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    sample_pool(all_codes(), count, &mut rng)
}

/// Run benchmark on a set of secrets
///
/// Games are independent and run in parallel. With a seeded config each
/// game gets its own seed derived from its position, so results repeat.
#[must_use]
pub fn run_benchmark(solver: &SolverConfig, secrets: &[Code]) -> BenchmarkResult {
    let start = Instant::now();

    let results: Vec<(usize, bool)> = secrets
        .par_iter()
        .enumerate()
        .map(|(idx, &secret)| {
            let mut config = solver.clone();
            config.seed = solver.seed.map(|s| s.wrapping_add(idx as u64));
            let result = solve_secret(secret, &config, DEFAULT_MAX_ATTEMPTS);
            (result.attempts(), result.success)
        })
        .collect();

    let duration = start.elapsed();

    let mut total_attempts = 0;
    let mut solved = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &(attempts, success) in &results {
        if !success {
            continue;
        }
        solved += 1;
        total_attempts += attempts;
        min_attempts = min_attempts.min(attempts);
        max_attempts = max_attempts.max(attempts);
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        solved,
        total_attempts,
        average_attempts: if solved > 0 {
            total_attempts as f64 / solved as f64
        } else {
            0.0
        },
        min_attempts: if solved > 0 { min_attempts } else { 0 },
        max_attempts,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let secrets = random_secrets(8, Some(1));
        let result = run_benchmark(&SolverConfig::default().with_seed(5), &secrets);

        assert_eq!(result.total_codes, 8);
        assert_eq!(result.solved, 8);
        assert!(result.average_attempts >= 1.0);
        assert!(result.min_attempts >= 1);
        assert!(result.max_attempts <= DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let secrets = random_secrets(6, Some(2));
        let result = run_benchmark(&SolverConfig::default().with_seed(5), &secrets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_attempts >= result.min_attempts as f64);
        assert!(result.average_attempts <= result.max_attempts as f64);
    }

    #[test]
    fn benchmark_empty_code_list() {
        let result = run_benchmark(&SolverConfig::default(), &[]);

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_attempts, 0);
        assert_eq!(result.min_attempts, 0);
    }

    #[test]
    fn seeded_benchmark_repeats() {
        let secrets = random_secrets(4, Some(3));
        let config = SolverConfig::default().with_seed(11);

        let a = run_benchmark(&config, &secrets);
        let b = run_benchmark(&config, &secrets);
        assert_eq!(a.total_attempts, b.total_attempts);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn random_secrets_are_distinct_and_seeded() {
        let a = random_secrets(25, Some(9));
        let b = random_secrets(25, Some(9));
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 25);
    }
}
