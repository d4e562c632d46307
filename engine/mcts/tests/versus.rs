//! Full games between the search agents through the shared `Agent` trait.

use games_connect4::{Agent, Board, HeuristicVariant, Player, RandomAgent, CELLS};
use mcts::{MctsAgent, MctsConfig};
use minimax::MinimaxAgent;

/// Play a game, checking after every move that the agent handed the board
/// back untouched and picked a legal column. Returns the winner.
fn play_checked<'a>(
    x: &'a mut dyn Agent,
    o: &'a mut dyn Agent,
    starting: Player,
) -> Option<Player> {
    let mut board = Board::new(Some(starting));

    loop {
        let mover = board.turn();
        let agent = match mover {
            Player::A => &mut *x,
            Player::B => &mut *o,
        };

        let before = board.clone();
        let column = agent.select_move(&mut board);
        assert_eq!(board, before, "{} left the board modified", agent.name());
        assert!(
            board.validate_move(column).is_ok(),
            "{} chose illegal column {column}",
            agent.name()
        );

        board.make_move(column);
        if board.check_win(mover) {
            return Some(mover);
        }
        if board.is_full() {
            assert_eq!(board.move_count(), CELLS);
            return None;
        }
    }
}

#[test]
fn minimax_and_mcts_play_complete_games() {
    let mut minimax = MinimaxAgent::new(3, HeuristicVariant::CenterColumn);
    let mut mcts = MctsAgent::with_config(MctsConfig::default().with_iterations(300)).with_seed(17);

    for starting in Player::ALL {
        play_checked(&mut minimax, &mut mcts, starting);
        play_checked(&mut mcts, &mut minimax, starting);
    }
}

#[test]
fn mcts_beats_random() {
    let mut mcts = MctsAgent::with_config(MctsConfig::default().with_iterations(500)).with_seed(3);
    let mut random = RandomAgent::with_seed(4);

    let mut wins = 0;
    let mut losses = 0;
    for starting in [Player::A, Player::B, Player::A, Player::B] {
        match play_checked(&mut mcts, &mut random, starting) {
            Some(Player::A) => wins += 1,
            Some(Player::B) => losses += 1,
            None => {}
        }
    }
    assert!(wins > losses, "mcts {wins} vs random {losses}");
}

#[test]
fn minimax_beats_random_from_both_sides() {
    let mut minimax = MinimaxAgent::new(4, HeuristicVariant::CenterColumn);
    let mut random = RandomAgent::with_seed(11);

    let mut minimax_wins = 0;
    for starting in Player::ALL {
        if play_checked(&mut minimax, &mut random, starting) == Some(Player::A) {
            minimax_wins += 1;
        }
        if play_checked(&mut random, &mut minimax, starting) == Some(Player::B) {
            minimax_wins += 1;
        }
    }
    assert!(minimax_wins >= 3, "minimax won {minimax_wins} of 4");
}
