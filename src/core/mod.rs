//! Core domain types for distinct-digit Mastermind
//!
//! Codes, feedback and the code space. Everything here is pure and
//! allocation-light.

mod code;
mod feedback;
mod space;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use feedback::{Feedback, FeedbackError};
pub use space::{SPACE_SIZE, all_codes, generate_all};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_bounds_hold_against_opening() {
        // positions <= digits <= 4 for every secret
        for secret in all_codes() {
            let fb = Feedback::calculate(&Code::OPENING, secret);
            assert!(fb.positions() <= fb.digits());
            assert!(fb.digits() <= 4);
        }
    }

    #[test]
    fn feedback_bounds_hold_on_sampled_pairs() {
        let codes = all_codes();
        for guess in codes.iter().step_by(97) {
            for secret in codes.iter().step_by(13) {
                let fb = Feedback::calculate(guess, secret);
                assert!(fb.positions() <= fb.digits());
                assert!(fb.digits() <= 4);
                assert_eq!(fb.is_win(), guess == secret);
            }
        }
    }
}
