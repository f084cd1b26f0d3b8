use std::fmt;

use crate::core::position::Position;

/// Recoverable failures.
///
/// Illegal moves are not errors; they are reported by `Board::move_checker`
/// returning `false`.
#[derive(Debug)]
pub enum GameError {
    /// The game configuration is internally inconsistent.
    InvalidConfig { reason: String },
    /// A custom layout places a piece where it cannot stand.
    InvalidLayout { position: Position, reason: String },
    /// A `row,col` string could not be parsed.
    ParsePosition { input: String, reason: String },
    /// A game record could not be encoded as JSON.
    Serialize { reason: String },
    /// I/O failure while exporting a game record.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            GameError::InvalidLayout { position, reason } => {
                write!(f, "invalid layout at {position}: {reason}")
            }
            GameError::ParsePosition { input, reason } => {
                write!(f, "cannot parse position {input:?}: {reason}")
            }
            GameError::Serialize { reason } => write!(f, "cannot serialize record: {reason}"),
            GameError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for GameError {}
