//! Solver configuration

use super::AdaptiveSelector;
use crate::core::Code;

/// Settings shared by every session a driver starts
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Guess-pool bounds for minimax selection
    pub selector: AdaptiveSelector,

    /// First guess of every session, played without any search
    pub opening: Code,

    /// Seed for the sampling RNG; `None` draws fresh entropy per session
    pub seed: Option<u64>,
}

impl SolverConfig {
    /// Use a fixed seed so sampled selections repeat across runs
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            selector: AdaptiveSelector::default(),
            opening: Code::OPENING,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SolverConfig::default();
        assert_eq!(config.selector.full_search_threshold, 1200);
        assert_eq!(config.selector.sample_size, 800);
        assert!(!config.selector.parallel);
        assert_eq!(config.opening, Code::OPENING);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn with_seed_sets_seed() {
        assert_eq!(SolverConfig::default().with_seed(9).seed, Some(9));
    }
}
