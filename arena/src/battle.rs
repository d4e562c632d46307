//! Agent-versus-agent games and battle tallies.

use std::fmt;
use std::time::Instant;

use anyhow::{Context, Result};
use games_connect4::{Agent, Board, Player};
use serde::Serialize;
use tracing::{debug, info};

/// How one game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// None for a full board with no four in a row
    pub winner: Option<Player>,
    pub moves: usize,
}

/// Play one game to completion. `agent_a` plays X, `agent_b` plays O.
///
/// Agent moves are validated, so a misbehaving agent ends the game with an
/// error instead of a panic.
pub fn play_game<'a>(
    agent_a: &'a mut dyn Agent,
    agent_b: &'a mut dyn Agent,
    starting: Player,
) -> Result<GameOutcome> {
    let mut board = Board::new(Some(starting));

    loop {
        let mover = board.turn();
        let agent = match mover {
            Player::A => &mut *agent_a,
            Player::B => &mut *agent_b,
        };

        let column = agent.select_move(&mut board);
        board
            .validate_move(column)
            .with_context(|| format!("{} chose an illegal move", agent.name()))?;
        board.make_move(column);
        debug!(player = %mover, column, "move played");

        if board.check_win(mover) {
            return Ok(GameOutcome {
                winner: Some(mover),
                moves: board.move_count(),
            });
        }
        if board.is_full() {
            return Ok(GameOutcome {
                winner: None,
                moves: board.move_count(),
            });
        }
    }
}

/// Tally of a series of battles, agent 1 always playing X.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BattleStats {
    pub agent1: String,
    pub agent2: String,
    pub games: u32,
    pub agent1_wins: u32,
    pub agent2_wins: u32,
    pub ties: u32,
    /// Total moves across all games
    pub moves: u64,
}

impl BattleStats {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        self.moves += outcome.moves as u64;
        match outcome.winner {
            Some(Player::A) => self.agent1_wins += 1,
            Some(Player::B) => self.agent2_wins += 1,
            None => self.ties += 1,
        }
    }
}

impl fmt::Display for BattleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (X) vs {} (O), {} games", self.agent1, self.agent2, self.games)?;
        writeln!(f, "  {:<24} {}", format!("{} wins:", self.agent1), self.agent1_wins)?;
        writeln!(f, "  {:<24} {}", format!("{} wins:", self.agent2), self.agent2_wins)?;
        write!(f, "  {:<24} {}", "ties:", self.ties)
    }
}

/// Run `battles` battles of two games each: agent 1 starts the first game
/// and agent 2 the second.
pub fn run_battles(
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    battles: u32,
) -> Result<BattleStats> {
    let mut stats = BattleStats {
        agent1: agent1.name().to_string(),
        agent2: agent2.name().to_string(),
        ..BattleStats::default()
    };

    let start = Instant::now();
    for battle in 0..battles {
        for starting in [Player::A, Player::B] {
            let outcome = play_game(agent1, agent2, starting)?;
            info!(
                battle = battle + 1,
                starting = %starting,
                winner = ?outcome.winner,
                moves = outcome.moves,
                "game finished"
            );
            stats.record(outcome);
        }
    }

    info!(
        games = stats.games,
        agent1_wins = stats.agent1_wins,
        agent2_wins = stats.agent2_wins,
        ties = stats.ties,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "battles complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_connect4::{RandomAgent, CELLS, COLUMNS};
    use minimax::MinimaxAgent;

    /// Always plays the lowest open column.
    struct LeftmostAgent;

    impl Agent for LeftmostAgent {
        fn name(&self) -> &str {
            "leftmost"
        }

        fn select_move(&mut self, board: &mut Board) -> usize {
            board.legal_moves()[0]
        }
    }

    /// Always answers with a column outside the board.
    struct BrokenAgent;

    impl Agent for BrokenAgent {
        fn name(&self) -> &str {
            "broken"
        }

        fn select_move(&mut self, _board: &mut Board) -> usize {
            COLUMNS
        }
    }

    #[test]
    fn test_leftmost_mirror_match() {
        // Filling columns left to right gives every even row to the starting
        // player, who completes row 0 with the 19th disc.
        for starting in Player::ALL {
            let outcome = play_game(&mut LeftmostAgent, &mut LeftmostAgent, starting).unwrap();
            assert_eq!(outcome.winner, Some(starting));
            assert_eq!(outcome.moves, 19);
        }
    }

    #[test]
    fn test_battle_counts_add_up() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);

        let stats = run_battles(&mut agent1, &mut agent2, 5).unwrap();
        assert_eq!(stats.games, 10);
        assert_eq!(stats.agent1_wins + stats.agent2_wins + stats.ties, 10);
        assert!(stats.moves >= 10 * 7);
        assert_eq!(stats.agent1, "random");
    }

    #[test]
    fn test_minimax_beats_random() {
        let mut agent1 = MinimaxAgent::new(3, games_connect4::HeuristicVariant::CenterColumn);
        let mut agent2 = RandomAgent::with_seed(7);

        let stats = run_battles(&mut agent1, &mut agent2, 3).unwrap();
        assert!(
            stats.agent1_wins > stats.agent2_wins,
            "minimax {} vs random {}",
            stats.agent1_wins,
            stats.agent2_wins
        );
    }

    #[test]
    fn test_agents_borrowed_from_different_scopes() {
        // One boxed agent outlives the game, the other is local to it
        let mut boxed: Box<dyn Agent> = Box::new(RandomAgent::with_seed(4));
        for starting in Player::ALL {
            let mut local = LeftmostAgent;
            let outcome = play_game(boxed.as_mut(), &mut local, starting).unwrap();
            assert!(outcome.moves >= 7 && outcome.moves <= CELLS);
        }
        assert_eq!(boxed.name(), "random");
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let err = play_game(&mut BrokenAgent, &mut LeftmostAgent, Player::A).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_stats_serialize() {
        let stats = BattleStats {
            agent1: "a".into(),
            agent2: "b".into(),
            games: 2,
            agent1_wins: 1,
            agent2_wins: 0,
            ties: 1,
            moves: 50,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["agent1_wins"], 1);
        assert_eq!(json["ties"], 1);
        assert_eq!(json["agent2"], "b");
    }
}
