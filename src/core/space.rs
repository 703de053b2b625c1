//! The universe of valid codes
//!
//! All 4-permutations of the digits 0-9, in ascending lexicographic order.

use super::code::Code;
use std::sync::OnceLock;

/// Number of codes with four distinct digits (10 × 9 × 8 × 7)
pub const SPACE_SIZE: usize = 5040;

static ALL_CODES: OnceLock<Vec<Code>> = OnceLock::new();

/// Generate every valid code in ascending order
///
/// # Examples
/// ```
/// use mastermind_solver::core::generate_all;
///
/// let codes = generate_all();
/// assert_eq!(codes.len(), 5040);
/// assert_eq!(codes[0].to_string(), "0123");
/// assert_eq!(codes[5039].to_string(), "9876");
/// ```
#[must_use]
pub fn generate_all() -> Vec<Code> {
    let mut codes = Vec::with_capacity(SPACE_SIZE);

    for a in 0..=9u8 {
        for b in (0..=9u8).filter(|&b| b != a) {
            for c in (0..=9u8).filter(|&c| c != a && c != b) {
                for d in (0..=9u8).filter(|&d| d != a && d != b && d != c) {
                    codes.push(Code::from_digits_unchecked([a, b, c, d]));
                }
            }
        }
    }

    codes
}

/// Shared, lazily generated code space
///
/// Built on first use and reused by every session afterwards.
#[must_use]
pub fn all_codes() -> &'static [Code] {
    ALL_CODES.get_or_init(generate_all)
}
