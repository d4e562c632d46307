//! Default configuration values loaded from config.defaults.toml.
//!
//! The file is embedded at compile time so the binaries need nothing on
//! disk to start.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    minimax: MinimaxDefaults,
    mcts: MctsDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct MinimaxDefaults {
    depth: u32,
    heuristic: u8,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    exploration: f64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> Option<u64> {
    DEFAULTS.common.seed
}

// Minimax
pub fn depth() -> u32 {
    DEFAULTS.minimax.depth
}
pub fn heuristic() -> u8 {
    DEFAULTS.minimax.heuristic
}

// MCTS
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}

// Arena
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
