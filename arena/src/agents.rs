//! Building agents from command line choices.

use std::fmt;

use clap::ValueEnum;
use games_connect4::{Agent, HeuristicVariant, RandomAgent};
use mcts::{MctsAgent, MctsConfig};
use minimax::{MinimaxAgent, MinimaxConfig};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Mcts,
    Random,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Minimax => "minimax",
            AgentKind::Mcts => "mcts",
            AgentKind::Random => "random",
        };
        f.write_str(name)
    }
}

/// Parameters for every agent kind, resolved from config and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSettings {
    pub depth: u32,
    pub heuristic: HeuristicVariant,
    pub iterations: u32,
    pub exploration: f64,
    pub seed: Option<u64>,
}

impl AgentSettings {
    /// Build an agent. `slot` separates the random streams of agents built
    /// from the same seed so two seeded MCTS agents do not mirror each other.
    pub fn build(&self, kind: AgentKind, slot: u64) -> Box<dyn Agent> {
        let seed = self.seed.map(|seed| seed.wrapping_add(slot));
        match kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::with_config(
                MinimaxConfig::default()
                    .with_depth(self.depth)
                    .with_heuristic(self.heuristic),
            )),
            AgentKind::Mcts => {
                let agent = MctsAgent::with_config(
                    MctsConfig::default()
                        .with_iterations(self.iterations)
                        .with_exploration(self.exploration),
                );
                match seed {
                    Some(seed) => Box::new(agent.with_seed(seed)),
                    None => Box::new(agent),
                }
            }
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}
