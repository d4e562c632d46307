//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> Option<u64> {
    defaults::seed()
}
fn d_depth() -> u32 {
    defaults::depth()
}
fn d_heuristic() -> u8 {
    defaults::heuristic()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_games() -> u32 {
    defaults::games()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub minimax: MinimaxSettings,
    #[serde(default)]
    pub mcts: MctsSettings,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Seed for MCTS rollouts and random agents; None draws one from the OS
    #[serde(default = "d_seed")]
    pub seed: Option<u64>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Alpha-beta search settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MinimaxSettings {
    #[serde(default = "d_depth")]
    pub depth: u32,
    /// Heuristic variant index (0, 1 or 2)
    #[serde(default = "d_heuristic")]
    pub heuristic: u8,
}

impl Default for MinimaxSettings {
    fn default() -> Self {
        Self {
            depth: defaults::depth(),
            heuristic: defaults::heuristic(),
        }
    }
}

/// Monte Carlo Tree Search settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MctsSettings {
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
}

impl Default for MctsSettings {
    fn default() -> Self {
        Self {
            iterations: defaults::iterations(),
            exploration: defaults::exploration(),
        }
    }
}

/// Battle harness settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_games")]
    pub games: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
        }
    }
}
