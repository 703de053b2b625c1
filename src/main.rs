//! Mastermind Solver - CLI
//!
//! Interactive and batch modes for the distinct-digit code solver.

use anyhow::{Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, random_secrets, run_benchmark,
        run_simple, run_test_all, solve_code,
    },
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{AdaptiveSelector, SolverConfig},
    telemetry,
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Solver for 4-digit, distinct-digit Mastermind using adaptive minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search every candidate when at most this many remain
    #[arg(long, global = true, default_value_t = 1200)]
    full_search_threshold: usize,

    /// Number of sampled guesses above the full-search threshold
    #[arg(long, global = true, default_value_t = 800)]
    sample_size: usize,

    /// Opening guess played before any feedback
    #[arg(long, global = true, default_value = "0123")]
    opening: String,

    /// Seed for reproducible sampling
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Score guesses on all cores
    #[arg(long, global = true)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: the solver guesses your code (default)
    Play,

    /// Solve a specific secret code
    Solve {
        /// The secret code, e.g. 5391
        secret: String,

        /// Show candidate counts for each step
        #[arg(short = 'd', long)]
        details: bool,
    },

    /// Show how a guess splits the remaining codes
    Analyze {
        /// Guess to analyze
        code: String,

        /// Earlier guesses as CODE:DIGITS,POSITIONS (repeatable)
        #[arg(short, long)]
        after: Vec<String>,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every possible code
    TestAll {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn solver_config(&self) -> Result<SolverConfig> {
        let opening: Code = self
            .opening
            .parse()
            .map_err(|e| anyhow!("invalid opening guess: {e}"))?;

        Ok(SolverConfig {
            selector: AdaptiveSelector::new(
                self.full_search_threshold,
                self.sample_size,
                self.parallel,
            ),
            opening,
            seed: self.seed,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = cli.solver_config()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_simple(&config).map_err(|e| anyhow!(e)),
        Commands::Solve { secret, details } => run_solve_command(secret, details, config),
        Commands::Analyze { code, after } => run_analyze_command(&code, &after),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, &config);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(limit, &config);
            Ok(())
        }
    }
}

fn run_solve_command(secret: String, details: bool, config: SolverConfig) -> Result<()> {
    let result = solve_code(SolveConfig::new(secret, config)).map_err(|e| anyhow!(e))?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(code: &str, after: &[String]) -> Result<()> {
    let result = analyze_code(code, after).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, config: &SolverConfig) {
    println!("Running benchmark on {count} random codes...");

    let secrets = random_secrets(count, config.seed);
    let result = run_benchmark(config, &secrets);
    print_benchmark_result(&result);
}

fn run_test_all_command(limit: Option<usize>, config: &SolverConfig) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nFull search up to {} candidates, {} sampled guesses above",
        config.selector.full_search_threshold, config.selector.sample_size
    );
    if let Some(seed) = config.seed {
        println!("Seed: {seed}");
    }
    println!();

    let stats = run_test_all(config, limit);
    print_test_all_statistics(&stats);
}
