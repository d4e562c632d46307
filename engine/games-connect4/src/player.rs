//! The two sides of a game.

use std::fmt;

use crate::error::PlayerError;

/// A player, identified by the integer value its discs carry on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    /// Player A marks cells with `-1`.
    A = -1,
    /// Player B marks cells with `+1`.
    B = 1,
}

impl Player {
    /// Both players, A first.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Cell value for this player's discs.
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Character used by the plain-text renderer.
    pub const fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }

    /// Pick a player uniformly at random.
    pub fn random() -> Self {
        if rand::random::<bool>() {
            Player::A
        } else {
            Player::B
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = PlayerError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Player::A),
            1 => Ok(Player::B),
            other => Err(PlayerError::Invalid(other)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.symbol(), self.value())
    }
}
