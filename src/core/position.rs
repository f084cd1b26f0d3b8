use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Step;
use crate::error::GameError;

/// A square on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Dark squares, the only ones pieces ever stand on.
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// The square `step` away, or `None` if it falls off an N×N board.
    pub fn shifted(self, step: Step, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(step.dr as isize)?;
        let col = self.col.checked_add_signed(step.dc as isize)?;
        let next = Position::new(row, col);
        next.in_bounds(size).then_some(next)
    }

    #[inline]
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Parses `row,col`, optionally wrapped in parentheses.
impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| GameError::ParsePosition {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();
        let Some((r, c)) = inner.split_once(',') else {
            return Err(err("expected `row,col`"));
        };
        let row = r.trim().parse::<usize>().map_err(|e| err(&e.to_string()))?;
        let col = c.trim().parse::<usize>().map_err(|e| err(&e.to_string()))?;
        Ok(Position::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coord::DIAGONALS;

    #[test]
    fn shifted_drops_off_board_squares() {
        let corner = Position::new(0, 0);
        let on_board: Vec<_> = DIAGONALS
            .iter()
            .filter_map(|&d| corner.shifted(d, 8))
            .collect();
        assert_eq!(on_board, vec![Position::new(1, 1)]);

        let far = Position::new(7, 7);
        assert_eq!(far.shifted(Step::new(1, 1), 8), None);
        assert_eq!(far.shifted(Step::new(-1, -1) * 2, 8), Some(Position::new(5, 5)));
    }

    #[test]
    fn parses_with_and_without_parens() {
        assert_eq!("2,3".parse::<Position>().unwrap(), Position::new(2, 3));
        assert_eq!(" (4, 6) ".parse::<Position>().unwrap(), Position::new(4, 6));
        assert!("4".parse::<Position>().is_err());
        assert!("a,1".parse::<Position>().is_err());
        assert!("-1,2".parse::<Position>().is_err());
    }

    #[test]
    fn display_matches_parse_format() {
        let p = Position::new(5, 2);
        assert_eq!(p.to_string().parse::<Position>().unwrap(), p);
    }
}
