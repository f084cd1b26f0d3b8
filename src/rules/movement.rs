//! Geometric move candidates for a single piece.
//!
//! Nothing here looks at the board contents: the functions enumerate every
//! on-board square a piece could reach, and `board::cell` filters them
//! against live occupancy.

use serde::{Deserialize, Serialize};

use crate::core::piece::CellState;
use crate::core::position::Position;

/// A jump: the square holding the piece to capture and the square to land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureCandidate {
    pub enemy: Position,
    pub landing: Position,
}

/// One-step diagonal destinations for `state` standing on `origin`.
///
/// Men get their two forward diagonals, kings all four. Empty squares get none.
pub fn possible_normal_positions(state: CellState, origin: Position, size: usize) -> Vec<Position> {
    state
        .directions()
        .iter()
        .filter_map(|&dir| origin.shifted(dir, size))
        .collect()
}

/// Jump candidates for `state` standing on `origin`, one per available direction
/// whose landing square is still on the board.
pub fn possible_capture_positions(
    state: CellState,
    origin: Position,
    size: usize,
) -> Vec<CaptureCandidate> {
    let mut out = Vec::with_capacity(state.directions().len());
    for &dir in state.directions() {
        let Some(enemy) = origin.shifted(dir, size) else {
            continue;
        };
        let Some(landing) = origin.shifted(dir * 2, size) else {
            continue;
        };
        out.push(CaptureCandidate { enemy, landing });
    }
    out
}
