//! Mastermind solving engine
//!
//! Candidate filtering, adaptive minimax guess selection and the session
//! that ties them together.

pub mod adaptive;
mod config;
pub mod minimax;
mod sampling;
mod session;

pub use adaptive::{AdaptiveSelector, SearchTier};
pub use config::SolverConfig;
pub use sampling::sample_pool;
pub use session::{Outcome, Progress, Session, SessionError, SessionState};
