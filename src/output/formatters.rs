//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback};

/// Format feedback as pegs: `●` in place, `○` present elsewhere, `·` absent
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let placed = usize::from(feedback.positions());
    let misplaced = usize::from(feedback.digits() - feedback.positions());
    let absent = CODE_LENGTH - placed - misplaced;

    format!("{}{}{}", "●".repeat(placed), "○".repeat(misplaced), "·".repeat(absent))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_all_absent() {
        let fb = Feedback::new(0, 0).unwrap();
        assert_eq!(feedback_pegs(fb), "····");
    }

    #[test]
    fn pegs_win() {
        assert_eq!(feedback_pegs(Feedback::WIN), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        let fb = Feedback::new(3, 1).unwrap();
        assert_eq!(feedback_pegs(fb), "●○○·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
