//! Minimax guess scoring
//!
//! Implements worst-case minimization over feedback buckets.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::{par_select_best_guess, select_best_guess};
