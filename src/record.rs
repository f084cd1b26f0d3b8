//! JSON export of a game's move record.
//!
//! The record is for display and archiving only; nothing reads it back into a
//! [`Board`].

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::history::HistoryEntry;
use crate::board::Board;
use crate::core::piece::Player;
use crate::error::GameError;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub format_version: u32,
    pub board_size: usize,
    pub active_player: Player,
    pub number_of_moves: u32,
    pub winner: Option<Player>,
    pub moves: Vec<HistoryEntry>,
}

impl GameRecord {
    pub fn from_board(board: &Board) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            board_size: board.size(),
            active_player: board.player(),
            number_of_moves: board.number_of_moves(),
            winner: board.winner(),
            moves: board.history().entries().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Serialize {
            reason: e.to_string(),
        })
    }
}

/// Writes the board's record as pretty JSON to `path`, replacing any existing file.
pub fn write_record(path: &Path, board: &Board) -> Result<(), GameError> {
    let record = GameRecord::from_board(board);
    let f = fs::File::create(path).map_err(|e| GameError::Io {
        stage: "record_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &record).map_err(|e| GameError::Io {
        stage: "record_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| GameError::Io {
        stage: "record_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}
