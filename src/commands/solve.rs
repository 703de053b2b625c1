//! Code solving command
//!
//! Plays a full session against a known secret and records every step.

use crate::core::{Code, Feedback};
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Outcome, Session, SolverConfig};

/// Attempt cap for automated games
pub const DEFAULT_MAX_ATTEMPTS: usize = 15;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_attempts: usize,
    pub solver: SolverConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String, solver: SolverConfig) -> Self {
        Self {
            secret,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            solver,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
}

impl SolveResult {
    /// Number of guesses played
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub worst_case: usize,
}

/// Solve the secret described by `config`
///
/// # Errors
///
/// Returns an error if the secret is not a valid code.
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, String> {
    let secret: Code = config
        .secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;

    Ok(solve_secret(secret, &config.solver, config.max_attempts))
}

/// Play a session against `secret`, answering every guess honestly
#[must_use]
pub fn solve_secret(secret: Code, solver: &SolverConfig, max_attempts: usize) -> SolveResult {
    let mut session = Session::new(solver.clone());
    let mut steps: Vec<GuessStep> = Vec::new();
    let mut success = false;

    while steps.len() < max_attempts {
        let guess = session.current_guess();
        let candidates_before = session.remaining();
        let worst_case = calculate_max_remaining(&guess, session.candidates());
        let feedback = Feedback::calculate(&guess, &secret);

        let outcome = session.submit(feedback.digits().into(), feedback.positions().into());

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: if feedback.is_win() {
                1
            } else {
                session.remaining()
            },
            worst_case,
        });

        match outcome {
            Ok(Outcome::Won { .. }) => {
                success = true;
                break;
            }
            Ok(Outcome::NextGuess { .. }) => {}
            Ok(Outcome::Contradiction) | Err(_) => {
                tracing::warn!(%secret, ?outcome, "honest feedback ended the session early");
                break;
            }
        }
    }

    SolveResult {
        success,
        steps,
        secret,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SolverConfig {
        SolverConfig::default().with_seed(17)
    }

    #[test]
    fn solve_code_succeeds() {
        let result = solve_code(SolveConfig::new("5391".to_string(), seeded())).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().guess, result.secret);
        assert_eq!(result.steps[0].guess, Code::OPENING);
        assert_eq!(result.steps[0].candidates_before, 5040);
    }

    #[test]
    fn solve_records_history() {
        let result = solve_code(SolveConfig::new("8260".to_string(), seeded())).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.worst_case <= step.candidates_before);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_code(SolveConfig::new("1123".to_string(), seeded())).is_err());
        assert!(solve_code(SolveConfig::new("abc".to_string(), seeded())).is_err());
    }

    #[test]
    fn solve_with_max_attempts_limit() {
        let mut config = SolveConfig::new("9876".to_string(), seeded());
        config.max_attempts = 1;

        let result = solve_code(config).unwrap();
        assert_eq!(result.attempts(), 1);
        assert!(!result.success);
    }

    #[test]
    fn solve_opening_secret_in_one() {
        let result = solve_secret(Code::OPENING, &seeded(), DEFAULT_MAX_ATTEMPTS);
        assert!(result.success);
        assert_eq!(result.attempts(), 1);
        assert!(result.steps[0].feedback.is_win());
    }
}
