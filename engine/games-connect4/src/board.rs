//! Reversible Connect 4 board.

use std::fmt;

use once_cell::sync::Lazy;

use crate::error::MoveError;
use crate::player::Player;
use crate::scoped::Scoped;

/// Board dimensions
pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
pub const CELLS: usize = COLUMNS * ROWS; // 42

/// Column the heuristic weights and move ordering favor.
pub const CENTER_COLUMN: usize = COLUMNS / 2;

/// Value of a cell nobody has played.
pub const EMPTY: i8 = 0;

/// Four `(row, column)` cells forming a straight line.
pub(crate) type Line = [(usize, usize); 4];

/// Every line of four on the grid: vertical, horizontal, diagonal (/) and
/// diagonal (\), in that order. Shared by win detection and the heuristic.
pub(crate) static LINES: Lazy<Vec<Line>> = Lazy::new(|| {
    let mut lines = Vec::with_capacity(69);

    // Vertical: bottom piece rows 0..ROWS-3
    for col in 0..COLUMNS {
        for row in 0..ROWS - 3 {
            lines.push([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
        }
    }

    // Horizontal: leftmost piece columns 0..COLUMNS-3
    for row in 0..ROWS {
        for col in 0..COLUMNS - 3 {
            lines.push([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
        }
    }

    // Diagonal (/): climbs to the right
    for row in 0..ROWS - 3 {
        for col in 0..COLUMNS - 3 {
            lines.push([
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ]);
        }
    }

    // Diagonal (\): climbs to the left
    for row in 0..ROWS - 3 {
        for col in 3..COLUMNS {
            lines.push([
                (row, col),
                (row + 1, col - 1),
                (row + 2, col - 2),
                (row + 3, col - 3),
            ]);
        }
    }

    lines
});

/// Connect 4 position with an undo stack.
///
/// Invariants:
/// - a cell is non-empty iff its row is below `column_heights[col]`
/// - `history.len()` equals the number of discs on the grid
/// - `turn` flips exactly once per `make_move` / `unmove`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cell values indexed `[row][column]`, row 0 at the bottom
    grid: [[i8; COLUMNS]; ROWS],
    /// Next free row of each column (0 = empty column)
    column_heights: [usize; COLUMNS],
    /// Moves played so far as `(row, column)`, most recent last
    history: Vec<(usize, usize)>,
    /// Player to move
    turn: Player,
}

impl Board {
    /// Create an empty board. `None` picks the starting player at random.
    pub fn new(starting_player: Option<Player>) -> Self {
        Self {
            grid: [[EMPTY; COLUMNS]; ROWS],
            column_heights: [0; COLUMNS],
            history: Vec::with_capacity(CELLS),
            turn: starting_player.unwrap_or_else(Player::random),
        }
    }

    /// Create a board by playing `moves` in order from an empty grid.
    ///
    /// # Panics
    /// Panics if any column is illegal at the point it is played.
    pub fn from_moves(starting_player: Player, moves: &[usize]) -> Self {
        let mut board = Self::new(Some(starting_player));
        for &column in moves {
            board.make_move(column);
        }
        board
    }

    /// Columns whose top cell is empty, in ascending order.
    ///
    /// Only a full board has no legal moves; a won position still reports the
    /// open columns, so callers check [`Board::check_win`] themselves.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&col| self.grid[ROWS - 1][col] == EMPTY)
            .collect()
    }

    /// Check that `column` can be played, for input that did not come from
    /// [`Board::legal_moves`].
    pub fn validate_move(&self, column: usize) -> Result<(), MoveError> {
        if column >= COLUMNS {
            return Err(MoveError::ColumnOutOfRange {
                column,
                columns: COLUMNS,
            });
        }
        if self.column_heights[column] >= ROWS {
            return Err(MoveError::ColumnFull(column));
        }
        Ok(())
    }

    /// Drop the current player's disc into `column` and pass the turn.
    ///
    /// No validation is done here: search calls this millions of times with
    /// columns taken from [`Board::legal_moves`].
    ///
    /// # Panics
    /// Playing a full or out-of-range column is a caller contract violation and
    /// panics on the grid index (use [`Board::validate_move`] first for
    /// untrusted input).
    #[inline]
    pub fn make_move(&mut self, column: usize) {
        debug_assert!(
            self.validate_move(column).is_ok(),
            "illegal move: column {column}"
        );
        let row = self.column_heights[column];
        self.grid[row][column] = self.turn.value();
        self.column_heights[column] += 1;
        self.history.push((row, column));
        self.turn = self.turn.opponent();
    }

    /// Undo the most recent move. Does nothing on an empty history.
    #[inline]
    pub fn unmove(&mut self) {
        let Some((row, column)) = self.history.pop() else {
            return;
        };
        self.grid[row][column] = EMPTY;
        self.column_heights[column] -= 1;
        self.turn = self.turn.opponent();
    }

    /// Play `column` and return a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the board, so nested searches can keep
    /// playing through it.
    ///
    /// # Panics
    /// Same contract as [`Board::make_move`].
    #[inline]
    pub fn play(&mut self, column: usize) -> Scoped<'_> {
        let mut scope = Scoped::new(self);
        scope.make_move(column);
        scope
    }

    /// Checkpoint the current position; every move made through the returned
    /// guard is undone when it drops.
    #[inline]
    pub fn scoped(&mut self) -> Scoped<'_> {
        Scoped::new(self)
    }

    /// Undo moves until only `len` remain in the history.
    #[inline]
    pub(crate) fn rewind_to(&mut self, len: usize) {
        while self.history.len() > len {
            self.unmove();
        }
    }

    /// Whether `player` has four in a row anywhere on the grid.
    ///
    /// Pass the player who just moved, not [`Board::turn`]: after a move the
    /// turn already belongs to the opponent.
    pub fn check_win(&self, player: Player) -> bool {
        let value = player.value();
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.grid[row][col] == value))
    }

    /// True iff every column is filled to the top.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.column_heights.iter().all(|&height| height == ROWS)
    }

    /// Player who made the most recent move, if any.
    #[inline]
    pub fn last_mover(&self) -> Option<Player> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.turn.opponent())
        }
    }

    /// Whether the most recent move completed a line of four.
    pub fn last_move_won(&self) -> bool {
        self.last_mover().is_some_and(|mover| self.check_win(mover))
    }

    /// Game over: the last move won or the grid is full.
    pub fn is_terminal(&self) -> bool {
        self.last_move_won() || self.is_full()
    }

    /// Player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Read-only view of the grid, indexed `[row][column]` with row 0 at the bottom.
    #[inline]
    pub fn cells(&self) -> &[[i8; COLUMNS]; ROWS] {
        &self.grid
    }

    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> i8 {
        self.grid[row][column]
    }

    #[inline]
    pub fn column_heights(&self) -> &[usize; COLUMNS] {
        &self.column_heights
    }

    /// Moves played so far as `(row, column)`, oldest first.
    #[inline]
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Some(Player::A))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.iter().rev() {
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = match Player::try_from(cell) {
                    Ok(player) => player.symbol(),
                    Err(_) => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        let footer: Vec<String> = (0..COLUMNS).map(|col| col.to_string()).collect();
        writeln!(f, "{}", footer.join(" "))
    }
}
