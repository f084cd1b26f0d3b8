use serde::{Deserialize, Serialize};

use crate::core::piece::{CellState, Player};
use crate::core::position::Position;

/// A piece removed by a jump, as it was just before the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedChecker {
    pub position: Position,
    pub state: CellState,
}

/// One executed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub player: Player,
    /// Piece state before the move (a man that is crowned by it is recorded as a man).
    pub state: CellState,
    pub from: Position,
    pub to: Position,
    pub captured: Vec<CapturedChecker>,
}

impl HistoryEntry {
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Append-only move log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }
}
