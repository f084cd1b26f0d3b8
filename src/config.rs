use crate::core::piece::Player;
use crate::error::GameError;

/// Largest board the engine accepts.
pub const MAX_BOARD_SIZE: usize = 26;

/// Game configuration (pure Rust, no config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length N of the N×N board.
    pub board_size: usize,

    /// Rows of men each side starts with.
    pub piece_rows: usize,

    /// Who moves first.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            piece_rows: 3,
            first_player: Player::Blue,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, piece_rows: usize, first_player: Player) -> Self {
        Self {
            board_size,
            piece_rows,
            first_player,
        }
    }

    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    pub fn with_piece_rows(mut self, n: usize) -> Self {
        self.piece_rows = n;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let n = self.board_size;
        if !(3..=MAX_BOARD_SIZE).contains(&n) {
            return Err(GameError::InvalidConfig {
                reason: format!("board_size must be in 3..={MAX_BOARD_SIZE}, got {n}"),
            });
        }
        if self.piece_rows == 0 {
            return Err(GameError::InvalidConfig {
                reason: "piece_rows must be at least 1".to_string(),
            });
        }
        // at least one empty row between the two camps
        if 2 * self.piece_rows >= n {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "piece_rows={} leaves no empty row on a {n}x{n} board",
                    self.piece_rows
                ),
            });
        }
        Ok(())
    }
}
