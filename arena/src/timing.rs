//! Wall-clock timing of single moves.

use std::time::{Duration, Instant};

use games_connect4::{Agent, Board, Player};
use tracing::info;

#[derive(Debug, Clone)]
pub struct TimingReport {
    pub agent: String,
    pub runs: u32,
    pub column: usize,
    pub total_ms: f64,
    pub mean_ms: f64,
    pub fastest_ms: f64,
    pub slowest_ms: f64,
}

/// Time `runs` calls to `select_move` on an empty board with X to move.
pub fn time_agent(agent: &mut dyn Agent, runs: u32) -> TimingReport {
    let runs = runs.max(1);
    let mut board = Board::new(Some(Player::A));
    let mut timings = Vec::with_capacity(runs as usize);
    let mut column = 0;

    for run in 0..runs {
        let start = Instant::now();
        column = agent.select_move(&mut board);
        let elapsed = start.elapsed();
        info!(run = run + 1, column, elapsed_ms = as_ms(elapsed), "timed move");
        timings.push(elapsed);
    }

    let total: Duration = timings.iter().sum();
    let fastest = timings.iter().min().copied().unwrap_or_default();
    let slowest = timings.iter().max().copied().unwrap_or_default();

    TimingReport {
        agent: agent.name().to_string(),
        runs,
        column,
        total_ms: as_ms(total),
        mean_ms: as_ms(total) / runs as f64,
        fastest_ms: as_ms(fastest),
        slowest_ms: as_ms(slowest),
    }
}

fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
