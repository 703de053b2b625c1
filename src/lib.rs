//! Mastermind Solver
//!
//! Guesses a 4-digit code with distinct digits from (digits matched,
//! positions matched) feedback, using adaptive minimax guess selection.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::solver::{Outcome, Session, SolverConfig};
//!
//! let mut session = Session::new(SolverConfig::default());
//! println!("First guess: {}", session.current_guess());
//!
//! // Secret 5391: 1 and 3 are present, neither in place
//! match session.submit(2, 0).unwrap() {
//!     Outcome::NextGuess { guess, attempts } => println!("Guess {attempts}: {guess}"),
//!     Outcome::Won { attempts } => println!("Solved in {attempts}"),
//!     Outcome::Contradiction => println!("No code fits"),
//! }
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logging setup
pub mod telemetry;
