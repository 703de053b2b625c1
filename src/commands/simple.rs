//! Interactive CLI mode
//!
//! The solver guesses, the user answers with digits and positions matched.

use crate::solver::{Outcome, Progress, Session, SolverConfig};
use colored::Colorize;
use std::io::{self, Write};

/// Parse user feedback such as `2 0`, `2,0` or `20`
///
/// Only checks that two integers were given; range checks belong to the
/// session.
///
/// # Errors
///
/// Returns an error message if the input does not hold two integers.
pub fn parse_feedback(input: &str) -> Result<(i64, i64), String> {
    const NUMERIC: &str = "Enter numeric feedback (0-4), e.g. '2 1'.";

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|p| !p.is_empty())
        .collect();

    let (digits, positions) = match parts.as_slice() {
        [d, p] => (*d, *p),
        // Two packed digits like "20"
        [packed] if packed.len() == 2 && packed.is_ascii() => packed.split_at(1),
        _ => return Err(NUMERIC.to_string()),
    };

    let digits = digits.parse::<i64>().map_err(|_| NUMERIC.to_string())?;
    let positions = positions.parse::<i64>().map_err(|_| NUMERIC.to_string())?;
    Ok((digits, positions))
}

/// Run the interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &SolverConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit code with no repeated digits (e.g. 5391).");
    println!("After each guess, enter two numbers:\n");
    println!("  - digits matched:    guess digits that appear anywhere in your code");
    println!("  - positions matched: guess digits in exactly the right place\n");
    println!("Example: '2 1'. Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = Session::new(config.clone());

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "My guess ({}) : {}",
            session.attempts(),
            session.current_guess().to_string().bright_yellow().bold()
        );

        let input = get_user_input("Feedback (digits positions)")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" | "restart" => {
                session.restart();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let (digits, positions) = match parse_feedback(&input) {
            Ok(values) => values,
            Err(msg) => {
                println!("❌ {msg}\n");
                continue;
            }
        };

        let progress = match session.apply_feedback(digits, positions) {
            Ok(progress) => progress,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match progress {
            Progress::Thinking { remaining } => {
                println!("Thinking... remaining possibilities: {remaining}");
                io::stdout().flush().map_err(|e| e.to_string())?;

                session.complete_guess().map_err(|e| e.to_string())?;

                if session.remaining() <= 10 {
                    let list: Vec<String> =
                        session.candidates().iter().map(ToString::to_string).collect();
                    println!("Still possible: {}", list.join(", ").bright_black());
                }
            }
            Progress::Finished(Outcome::Won { attempts }) => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    format!(
                        "🎉 I guessed it {} in {attempts} {}.",
                        session.current_guess(),
                        if attempts == 1 { "attempt" } else { "attempts" }
                    )
                    .bright_green()
                    .bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());

                if !play_again(&mut session)? {
                    return Ok(());
                }
            }
            Progress::Finished(Outcome::Contradiction) => {
                println!(
                    "\n{}",
                    "No possible number fits that feedback - please check for inconsistent feedback."
                        .red()
                        .bold()
                );

                if !play_again(&mut session)? {
                    return Ok(());
                }
            }
            // apply_feedback never finishes with a fresh guess
            Progress::Finished(Outcome::NextGuess { .. }) => {}
        }
    }
}

/// Ask whether to start another game, restarting the session if so
fn play_again(session: &mut Session) -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            session.restart();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_space_separated() {
        assert_eq!(parse_feedback("2 0"), Ok((2, 0)));
        assert_eq!(parse_feedback("  3   1 "), Ok((3, 1)));
    }

    #[test]
    fn parse_other_separators() {
        assert_eq!(parse_feedback("2,1"), Ok((2, 1)));
        assert_eq!(parse_feedback("4/4"), Ok((4, 4)));
        assert_eq!(parse_feedback("2, 1"), Ok((2, 1)));
    }

    #[test]
    fn parse_packed_digits() {
        assert_eq!(parse_feedback("20"), Ok((2, 0)));
        assert_eq!(parse_feedback("44"), Ok((4, 4)));
    }

    #[test]
    fn parse_leaves_range_checks_to_session() {
        assert_eq!(parse_feedback("1 2"), Ok((1, 2)));
        assert_eq!(parse_feedback("9 0"), Ok((9, 0)));
        assert_eq!(parse_feedback("-1 0"), Ok((-1, 0)));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(parse_feedback("").is_err());
        assert!(parse_feedback("two one").is_err());
        assert!(parse_feedback("1 2 3").is_err());
        assert!(parse_feedback("2").is_err());
        assert!(parse_feedback("2x").is_err());
    }
}
