//! Static position evaluator used at the minimax depth cutoff.
//!
//! The score is positive when the position favors player A and negative when
//! it favors player B. Every line of four holding three discs of one player
//! and one empty cell counts as a threat worth one point. The center-column
//! variants additionally weight discs in [`CENTER_COLUMN`] by
//! `1 - 0.1 * row`, signed by owner.

use crate::board::{Board, CENTER_COLUMN, EMPTY, LINES, ROWS};
use crate::error::HeuristicError;
use crate::player::Player;

/// Rows of the center column counted by [`HeuristicVariant::CenterBottom`].
const CENTER_BOTTOM_ROWS: usize = 4;

/// Which center-column weighting to add on top of the threat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeuristicVariant {
    /// Threat lines only (variant 0).
    Threats,
    /// Threats plus every center-column disc (variant 1).
    #[default]
    CenterColumn,
    /// Threats plus center-column discs in the bottom four rows (variant 2).
    CenterBottom,
}

impl HeuristicVariant {
    /// Numeric identifier used in configuration and on the command line.
    pub const fn index(self) -> u8 {
        match self {
            HeuristicVariant::Threats => 0,
            HeuristicVariant::CenterColumn => 1,
            HeuristicVariant::CenterBottom => 2,
        }
    }

    /// Number of center-column rows this variant weights.
    const fn center_rows(self) -> usize {
        match self {
            HeuristicVariant::Threats => 0,
            HeuristicVariant::CenterColumn => ROWS,
            HeuristicVariant::CenterBottom => CENTER_BOTTOM_ROWS,
        }
    }
}

impl TryFrom<u8> for HeuristicVariant {
    type Error = HeuristicError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HeuristicVariant::Threats),
            1 => Ok(HeuristicVariant::CenterColumn),
            2 => Ok(HeuristicVariant::CenterBottom),
            other => Err(HeuristicError::UnknownVariant(other)),
        }
    }
}

/// Weight of a center-column disc at `row`; shrinks toward the top.
#[inline]
fn center_weight(row: usize) -> f64 {
    1.0 - 0.1 * row as f64
}

impl Board {
    /// Deterministic, side-effect-free estimate of the position, A-positive.
    pub fn heuristic(&self, variant: HeuristicVariant) -> f64 {
        let cells = self.cells();
        let a = Player::A.value();
        let b = Player::B.value();

        let mut score = 0.0;
        for line in LINES.iter() {
            let (mut count_a, mut count_b, mut empty) = (0u8, 0u8, 0u8);
            for &(row, col) in line {
                match cells[row][col] {
                    EMPTY => empty += 1,
                    v if v == a => count_a += 1,
                    v if v == b => count_b += 1,
                    _ => {}
                }
            }
            if empty == 1 {
                if count_a == 3 {
                    score += 1.0;
                } else if count_b == 3 {
                    score -= 1.0;
                }
            }
        }

        for (row, cells_row) in cells.iter().enumerate().take(variant.center_rows()) {
            let owner = cells_row[CENTER_COLUMN];
            if owner == a {
                score += center_weight(row);
            } else if owner == b {
                score -= center_weight(row);
            }
        }

        score
    }
}
