//! Command line for the arena binary.
//!
//! Defaults come from config.toml with environment variable overrides, and
//! flags given on the command line take priority over both.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use engine_config::{load_config, CentralConfig};
use games_connect4::HeuristicVariant;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

use crate::agents::{AgentKind, AgentSettings};

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_depth() -> u32 {
    CENTRAL_CONFIG.minimax.depth
}

fn default_heuristic() -> u8 {
    CENTRAL_CONFIG.minimax.heuristic
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_seed() -> Option<u64> {
    CENTRAL_CONFIG.common.seed
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Pit Connect 4 agents against each other or against you")]
#[command(
    long_about = "Runs minimax, MCTS and random agents in head-to-head battles, times a
single move, or plays an interactive game on the terminal.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Minimax search depth in plies below each root move
    #[arg(long, global = true, default_value_t = default_depth())]
    pub depth: u32,

    /// Minimax heuristic variant (0 = threats, 1 = center column, 2 = center bottom)
    #[arg(long, global = true, default_value_t = default_heuristic())]
    pub heuristic: u8,

    /// MCTS iterations per move
    #[arg(long, global = true, default_value_t = default_iterations())]
    pub iterations: u32,

    /// MCTS exploration constant
    #[arg(long, global = true, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Seed for MCTS rollouts and random agents (OS entropy when unset)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value_t = default_log_level())]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play battles between two agents. Each battle is two games so both
    /// agents get to start; agent 1 always plays X.
    Battle {
        #[arg(long, value_enum)]
        agent1: AgentKind,

        #[arg(long, value_enum)]
        agent2: AgentKind,

        /// Number of battles
        #[arg(long, default_value_t = default_games())]
        games: u32,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time one move from the empty board
    Time {
        #[arg(long, value_enum)]
        agent: AgentKind,

        /// Number of timed moves
        #[arg(long, default_value_t = 1)]
        runs: u32,
    },

    /// Play against an agent on the terminal
    Play {
        #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
        opponent: AgentKind,

        /// Make the first move yourself
        #[arg(long)]
        human_first: bool,
    },
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        HeuristicVariant::try_from(self.heuristic)?;

        if !(self.exploration.is_finite() && self.exploration >= 0.0) {
            return Err(anyhow!(
                "exploration must be a finite non-negative number, got {}",
                self.exploration
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        if let Command::Battle { games: 0, .. } = self.command {
            return Err(anyhow!("games must be greater than 0"));
        }

        Ok(())
    }

    /// Agent parameters after merging flags over configuration.
    pub fn agent_settings(&self) -> Result<AgentSettings> {
        Ok(AgentSettings {
            depth: self.depth,
            heuristic: HeuristicVariant::try_from(self.heuristic)?,
            iterations: self.iterations,
            exploration: self.exploration,
            seed: self.seed.or_else(default_seed),
        })
    }
}
