//! Minimax configuration parameters.

use games_connect4::HeuristicVariant;

/// Configuration for alpha-beta search.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimaxConfig {
    /// Plies searched below the root move before the heuristic is applied.
    /// 0 scores each root move with the heuristic directly.
    pub depth: u32,

    /// Static evaluator used at the depth cutoff.
    pub heuristic: HeuristicVariant,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            heuristic: HeuristicVariant::CenterColumn,
        }
    }
}

impl MinimaxConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            depth: 2,
            heuristic: HeuristicVariant::CenterColumn,
        }
    }

    /// Builder pattern: set search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder pattern: set heuristic variant.
    pub fn with_heuristic(mut self, heuristic: HeuristicVariant) -> Self {
        self.heuristic = heuristic;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimaxConfig::default();
        assert_eq!(config.depth, 4);
        assert_eq!(config.heuristic, HeuristicVariant::CenterColumn);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MinimaxConfig::default()
            .with_depth(6)
            .with_heuristic(HeuristicVariant::CenterBottom);

        assert_eq!(config.depth, 6);
        assert_eq!(config.heuristic, HeuristicVariant::CenterBottom);
    }
}
