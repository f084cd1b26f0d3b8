use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Step, DIAGONALS, DOWN_DIAGONALS, UP_DIAGONALS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// Diagonals a man of this colour may step along.
    ///
    /// Blue starts on the low rows and advances downward; red starts on the
    /// high rows and advances upward.
    #[inline]
    pub fn forward_diagonals(self) -> &'static [Step] {
        match self {
            Player::Blue => &DOWN_DIAGONALS,
            Player::Red => &UP_DIAGONALS,
        }
    }

    /// The row on which a man of this colour is crowned.
    #[inline]
    pub fn crowning_row(self, size: usize) -> usize {
        match self {
            Player::Blue => size - 1,
            Player::Red => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => f.pad("blue"),
            Player::Red => f.pad("red"),
        }
    }
}

/// What occupies a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Empty,
    BlueMan,
    BlueKing,
    RedMan,
    RedKing,
}

impl CellState {
    #[inline]
    pub fn man(player: Player) -> Self {
        match player {
            Player::Blue => CellState::BlueMan,
            Player::Red => CellState::RedMan,
        }
    }

    #[inline]
    pub fn owner(self) -> Option<Player> {
        use CellState::*;
        match self {
            Empty => None,
            BlueMan | BlueKing => Some(Player::Blue),
            RedMan | RedKing => Some(Player::Red),
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, CellState::BlueKing | CellState::RedKing)
    }

    /// The crowned form of a man. Kings and empty squares map to themselves.
    #[inline]
    pub fn promoted(self) -> Self {
        match self {
            CellState::BlueMan => CellState::BlueKing,
            CellState::RedMan => CellState::RedKing,
            other => other,
        }
    }

    /// Unit diagonals this piece may move or jump along.
    pub fn directions(self) -> &'static [Step] {
        match self.owner() {
            None => &[],
            Some(_) if self.is_king() => &DIAGONALS,
            Some(player) => player.forward_diagonals(),
        }
    }

    /// One-character glyph used by the terminal renderer.
    pub fn glyph(self) -> char {
        use CellState::*;
        match self {
            Empty => '.',
            BlueMan => 'b',
            BlueKing => 'B',
            RedMan => 'r',
            RedKing => 'R',
        }
    }
}
