//! Test every secret - comprehensive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use super::solve::{DEFAULT_MAX_ATTEMPTS, solve_secret};
use crate::core::{Code, all_codes};
use crate::solver::SolverConfig;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub failed_codes: Vec<Code>,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(Code, usize)>,
}

/// Run solver on every code (or the first `limit` codes)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all(solver: &SolverConfig, limit: Option<usize>) -> TestAllStatistics {
    let codes = all_codes();
    let test_codes = &codes[..limit.unwrap_or(codes.len()).min(codes.len())];

    println!("🎯 Testing {} codes...", test_codes.len());

    let pb = ProgressBar::new(test_codes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = test_codes
        .par_iter()
        .enumerate()
        .map(|(idx, &secret)| {
            let mut config = solver.clone();
            config.seed = solver.seed.map(|s| s.wrapping_add(idx as u64));
            let result = solve_secret(secret, &config, DEFAULT_MAX_ATTEMPTS);
            pb.inc(1);

            CodeTestResult {
                secret,
                guesses: result.steps.iter().map(|s| s.guess).collect(),
                success: result.success,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for r in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(r.guesses.len()).or_insert(0) += 1;
    }

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let failed_codes: Vec<Code> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.secret)
        .collect();

    let total_guesses: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let max_guesses = solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0);

    let mut hardest_codes: Vec<(Code, usize)> = solved
        .iter()
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    hardest_codes.sort_by_key(|&(code, n)| (std::cmp::Reverse(n), code));
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: failed_codes.len(),
        failed_codes,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
        for code in stats.failed_codes.iter().take(10) {
            println!("    {}", code.to_string().red());
        }
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
    println!(
        "  Time per code:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 && max_count > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (*count * 40 / max_count).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.to_string().yellow(), guesses);
        }
    }
}
