//! Secret code representation
//!
//! A Code is four pairwise-distinct decimal digits. Codes are `Copy` and
//! compare by value.

use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// A 4-digit code with no repeated digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit(char),
    DigitOutOfRange(u8),
    RepeatedDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "Code contains non-digit character '{ch}'"),
            Self::DigitOutOfRange(d) => write!(f, "Digit {d} is outside 0-9"),
            Self::RepeatedDigit(d) => write!(f, "Digit {d} appears more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Fixed opening guess, played before any feedback exists
    pub const OPENING: Self = Self([0, 1, 2, 3]);

    /// Create a code from four digits
    ///
    /// # Errors
    /// Returns `CodeError` if a digit is above 9 or a digit repeats.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new([5, 3, 9, 1]).unwrap();
    /// assert_eq!(code.to_string(), "5391");
    ///
    /// assert!(Code::new([1, 1, 2, 3]).is_err());
    /// assert!(Code::new([1, 2, 3, 10]).is_err());
    /// ```
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut seen = 0u16;
        for &d in &digits {
            if d > 9 {
                return Err(CodeError::DigitOutOfRange(d));
            }
            if seen & (1 << d) != 0 {
                return Err(CodeError::RepeatedDigit(d));
            }
            seen |= 1 << d;
        }
        Ok(Self(digits))
    }

    /// Build a code the caller already knows is valid
    #[inline]
    pub(crate) const fn from_digits_unchecked(digits: [u8; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    /// Get the digits in order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Check whether the code contains a digit anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(s.chars()) {
            let d = ch.to_digit(10).ok_or(CodeError::NonDigit(ch))?;
            *slot = d as u8;
        }

        Self::new(digits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
