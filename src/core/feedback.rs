//! Feedback calculation and representation
//!
//! Feedback is the pair (digits matched, positions matched) a secret gives a
//! guess. Digits are counted per guess position: a guess digit scores once if
//! it appears anywhere in the secret. Positions count exact digit-and-index
//! matches, so positions never exceed digits.

use super::code::{CODE_LENGTH, Code};
use std::fmt;

const MAX_MATCHES: u8 = CODE_LENGTH as u8;

/// Feedback for a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    digits: u8,
    positions: u8,
}

/// Error type for feedback values outside the valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    OutOfRange { digits: i64, positions: i64 },
    PositionsExceedDigits { digits: u8, positions: u8 },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { digits, positions } => write!(
                f,
                "Values must be 0-{MAX_MATCHES}, got digits={digits} positions={positions}"
            ),
            Self::PositionsExceedDigits { digits, positions } => write!(
                f,
                "Positions matched ({positions}) can't be greater than digits matched ({digits})"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Every digit in place
    pub const WIN: Self = Self {
        digits: MAX_MATCHES,
        positions: MAX_MATCHES,
    };

    /// Number of distinct bucket slots used by [`Feedback::index`]
    pub const SLOTS: usize = (CODE_LENGTH + 1) * (CODE_LENGTH + 1);

    /// Create validated feedback
    ///
    /// Accepts wide integers so that out-of-range input from a driver is
    /// rejected here rather than wrapped.
    ///
    /// # Errors
    /// Returns `FeedbackError` if either value is outside 0-4 or positions
    /// exceed digits.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let fb = Feedback::new(2, 0).unwrap();
    /// assert_eq!(fb.digits(), 2);
    ///
    /// assert!(Feedback::new(1, 2).is_err());
    /// assert!(Feedback::new(5, 0).is_err());
    /// assert!(Feedback::new(-1, 0).is_err());
    /// ```
    pub fn new(digits: i64, positions: i64) -> Result<Self, FeedbackError> {
        let in_range = |v: i64| (0..=i64::from(MAX_MATCHES)).contains(&v);
        if !in_range(digits) || !in_range(positions) {
            return Err(FeedbackError::OutOfRange { digits, positions });
        }

        let (digits, positions) = (digits as u8, positions as u8);
        if positions > digits {
            return Err(FeedbackError::PositionsExceedDigits { digits, positions });
        }

        Ok(Self { digits, positions })
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess: Code = "0123".parse().unwrap();
    /// let secret: Code = "5391".parse().unwrap();
    /// let fb = Feedback::calculate(&guess, &secret);
    ///
    /// // 1 and 3 are present, neither in place
    /// assert_eq!((fb.digits(), fb.positions()), (2, 0));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let g = guess.digits();
        let s = secret.digits();

        let positions = g.iter().zip(s).filter(|(gd, sd)| gd == sd).count() as u8;

        // One hit per guess index
        let digits = g.iter().filter(|&&gd| secret.contains(gd)).count() as u8;

        Self { digits, positions }
    }

    /// Digits of the guess present anywhere in the secret
    #[inline]
    #[must_use]
    pub const fn digits(self) -> u8 {
        self.digits
    }

    /// Digits of the guess in their exact position
    #[inline]
    #[must_use]
    pub const fn positions(self) -> u8 {
        self.positions
    }

    /// Check whether every position matched
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.positions == MAX_MATCHES
    }

    /// Dense index in `0..Feedback::SLOTS`, used for bucket counting
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.digits as usize * (CODE_LENGTH + 1) + self.positions as usize
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D {}P", self.digits, self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn feedback_win_constant() {
        assert!(Feedback::WIN.is_win());
        assert_eq!(Feedback::WIN.digits(), 4);
        assert_eq!(Feedback::WIN.positions(), 4);
        assert_eq!(Feedback::WIN.index(), Feedback::SLOTS - 1);
    }

    #[test]
    fn feedback_identical_codes() {
        for s in ["0123", "5391", "9876", "4051"] {
            let c = code(s);
            assert_eq!(Feedback::calculate(&c, &c), Feedback::WIN);
        }
    }

    #[test]
    fn feedback_no_overlap() {
        let fb = Feedback::calculate(&code("0123"), &code("4567"));
        assert_eq!((fb.digits(), fb.positions()), (0, 0));
    }

    #[test]
    fn feedback_all_present_none_placed() {
        let fb = Feedback::calculate(&code("0123"), &code("1032"));
        assert_eq!((fb.digits(), fb.positions()), (4, 0));
    }

    #[test]
    fn feedback_mixed() {
        // 1 in place, 7 present elsewhere, 3 and 5 absent
        let fb = Feedback::calculate(&code("1735"), &code("1278"));
        assert_eq!((fb.digits(), fb.positions()), (2, 1));
    }

    #[test]
    fn feedback_is_symmetric_for_distinct_digits() {
        let a = code("0123");
        let b = code("5391");
        assert_eq!(Feedback::calculate(&a, &b), Feedback::calculate(&b, &a));
    }

    #[test]
    fn feedback_new_valid_range() {
        for d in 0..=4 {
            for p in 0..=d {
                let fb = Feedback::new(d, p).unwrap();
                assert_eq!(i64::from(fb.digits()), d);
                assert_eq!(i64::from(fb.positions()), p);
            }
        }
    }

    #[test]
    fn feedback_new_rejects_positions_above_digits() {
        assert_eq!(
            Feedback::new(1, 2),
            Err(FeedbackError::PositionsExceedDigits {
                digits: 1,
                positions: 2
            })
        );
    }

    #[test]
    fn feedback_new_rejects_out_of_range() {
        assert!(matches!(
            Feedback::new(5, 1),
            Err(FeedbackError::OutOfRange { .. })
        ));
        assert!(matches!(
            Feedback::new(2, -1),
            Err(FeedbackError::OutOfRange { .. })
        ));
    }

    #[test]
    fn feedback_index_is_unique() {
        let mut seen = [false; Feedback::SLOTS];
        for d in 0..=4 {
            for p in 0..=d {
                let idx = Feedback::new(d, p).unwrap().index();
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(2, 0).unwrap().to_string(), "2D 0P");
    }
}
