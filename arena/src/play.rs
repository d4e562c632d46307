//! Human versus agent on the terminal.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use games_connect4::{Agent, Board, Player};
use tracing::info;

/// The human always plays X (player A).
const HUMAN: Player = Player::A;

/// Play one game, reading the human's columns from `input` and writing the
/// board and prompts to `output`. Returns the winner, or None for a draw.
pub fn play_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    opponent: &mut dyn Agent,
    human_first: bool,
) -> Result<Option<Player>> {
    let starting = if human_first { HUMAN } else { HUMAN.opponent() };
    let mut board = Board::new(Some(starting));
    writeln!(output, "You are {} against {}.", HUMAN.symbol(), opponent.name())?;

    loop {
        let mover = board.turn();
        let column = if mover == HUMAN {
            write!(output, "\n{board}")?;
            read_column(&mut input, &mut output, &board)?
        } else {
            let column = opponent.select_move(&mut board);
            board
                .validate_move(column)
                .with_context(|| format!("{} chose an illegal move", opponent.name()))?;
            writeln!(output, "{} plays {column}", opponent.name())?;
            column
        };
        board.make_move(column);

        if board.check_win(mover) {
            write!(output, "\n{board}")?;
            let message = if mover == HUMAN { "You win!" } else { "You lose." };
            writeln!(output, "{message}")?;
            info!(winner = %mover, moves = board.move_count(), "game over");
            return Ok(Some(mover));
        }
        if board.is_full() {
            write!(output, "\n{board}")?;
            writeln!(output, "Draw.")?;
            info!(moves = board.move_count(), "game drawn");
            return Ok(None);
        }
    }
}

/// Prompt until the human enters a playable column.
fn read_column<R: BufRead, W: Write>(input: &mut R, output: &mut W, board: &Board) -> Result<usize> {
    loop {
        write!(output, "Your move (column): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }

        let column = match line.trim().parse::<usize>() {
            Ok(column) => column,
            Err(_) => {
                writeln!(output, "'{}' is not a column number", line.trim())?;
                continue;
            }
        };
        match board.validate_move(column) {
            Ok(()) => return Ok(column),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
