//! A single square and the move legality that depends on live occupancy.
//!
//! A [`Cell`] does not point back at its board. Every query that needs to look
//! at neighbouring squares takes the owning [`Board`] as a parameter.

use crate::board::Board;
use crate::core::piece::{CellState, Player};
use crate::core::position::Position;
use crate::rules::movement::{possible_capture_positions, possible_normal_positions, CaptureCandidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    state: CellState,
}

/// How a requested destination is reached, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedMove {
    Normal,
    Capture(CaptureCandidate),
}

impl Cell {
    #[inline]
    pub(crate) fn new(position: Position, state: CellState) -> Self {
        Self { position, state }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.position.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.position.col
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    #[inline]
    pub fn owner(&self) -> Option<Player> {
        self.state.owner()
    }

    /// True iff this cell holds one of `player`'s pieces.
    #[inline]
    pub fn is_turn(&self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    #[inline]
    pub fn is_blue(&self) -> bool {
        self.owner() == Some(Player::Blue)
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.owner() == Some(Player::Red)
    }

    /// Both cells hold pieces and the colours differ.
    pub fn is_enemy_of(&self, other: &Cell) -> bool {
        match (self.owner(), other.owner()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.state.is_king()
    }

    /// One-step destinations whose square is currently empty.
    ///
    /// Empty unless this cell holds a piece of the board's active player.
    pub fn possible_normal_movements(&self, board: &Board) -> Vec<Position> {
        if !self.is_turn(board.player()) {
            return Vec::new();
        }
        possible_normal_positions(self.state, self.position, board.size())
            .into_iter()
            .filter(|&p| board.cell(p).is_empty())
            .collect()
    }

    /// Jumps over an opposing piece onto an empty square.
    ///
    /// Empty unless this cell holds a piece of the board's active player.
    pub fn possible_capture_movements(&self, board: &Board) -> Vec<CaptureCandidate> {
        if !self.is_turn(board.player()) {
            return Vec::new();
        }
        possible_capture_positions(self.state, self.position, board.size())
            .into_iter()
            .filter(|c| board.cell(c.landing).is_empty() && self.is_enemy_of(board.cell(c.enemy)))
            .collect()
    }

    /// Destinations to offer for this cell. Any available jump hides the plain steps.
    pub fn possible_movements(&self, board: &Board) -> Vec<Position> {
        let captures = self.possible_capture_movements(board);
        if captures.is_empty() {
            self.possible_normal_movements(board)
        } else {
            captures.into_iter().map(|c| c.landing).collect()
        }
    }

    /// Recomputes legality from scratch and classifies a move to `to`.
    pub(crate) fn resolve_move(&self, board: &Board, to: Position) -> Option<ResolvedMove> {
        if self.possible_normal_movements(board).contains(&to) {
            return Some(ResolvedMove::Normal);
        }
        self.possible_capture_movements(board)
            .into_iter()
            .find(|c| c.landing == to)
            .map(ResolvedMove::Capture)
    }

    /// Crowns a man standing on its far row. Returns whether the state changed.
    pub fn promote_if_eligible(&mut self, size: usize) -> bool {
        let Some(player) = self.owner() else {
            return false;
        };
        if self.is_king() || self.row() != player.crowning_row(size) {
            return false;
        }
        self.state = self.state.promoted();
        true
    }
}
