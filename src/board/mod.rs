//! The board aggregate: grid, active player, move counter and history.
//!
//! [`Board`] is the only writer of cell state. Callers query it
//! ([`Board::is_available_to_move`], [`Board::possible_movements`]) and ask it to
//! move ([`Board::move_checker`]); legality is always recomputed from the
//! current grid before anything is mutated.

pub mod cell;
pub mod history;

use log::{debug, info, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::GameConfig;
use crate::core::piece::{CellState, Player};
use crate::core::position::Position;
use crate::error::GameError;

use self::cell::{Cell, ResolvedMove};
use self::history::{CapturedChecker, History, HistoryEntry};

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Row-major, `size * size` cells.
    cells: Vec<Cell>,
    player: Player,
    /// Counts red's moves only.
    number_of_moves: u32,
    history: History,
}

impl Default for Board {
    fn default() -> Self {
        Self::opening(GameConfig::default())
    }
}

impl Board {
    /// A board in the opening position for `config`.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::opening(config))
    }

    /// A board holding only `pieces`, with `player` to move.
    ///
    /// Men placed on their crowning row are crowned immediately.
    pub fn from_layout(
        config: GameConfig,
        player: Player,
        pieces: &[(Position, CellState)],
    ) -> Result<Self, GameError> {
        config.validate()?;
        let mut board = Self::blank(config.board_size, player);

        let mut seen: FxHashSet<Position> = FxHashSet::default();
        for &(position, state) in pieces {
            let reject = |reason: &str| GameError::InvalidLayout {
                position,
                reason: reason.to_string(),
            };
            if !position.in_bounds(board.size) {
                return Err(reject("outside the board"));
            }
            if !position.is_playable() {
                return Err(reject("not a playable square"));
            }
            if state == CellState::Empty {
                return Err(reject("empty is not a piece"));
            }
            if !seen.insert(position) {
                return Err(reject("square listed twice"));
            }
            board.cell_mut(position).set_state(state);
        }

        board.update_cells();
        Ok(board)
    }

    fn blank(size: usize, player: Player) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(Position::new(row, col), CellState::Empty));
            }
        }
        Self {
            size,
            cells,
            player,
            number_of_moves: 0,
            history: History::new(),
        }
    }

    fn opening(config: GameConfig) -> Self {
        let n = config.board_size;
        let rows = config.piece_rows;
        let mut board = Self::blank(n, config.first_player);
        for cell in board.cells.iter_mut() {
            if !cell.position().is_playable() {
                continue;
            }
            if cell.row() < rows {
                cell.set_state(CellState::BlueMan);
            } else if cell.row() >= n - rows {
                cell.set_state(CellState::RedMan);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The active player.
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn number_of_moves(&self) -> u32 {
        self.number_of_moves
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        position
            .in_bounds(self.size)
            .then(|| &self.cells[position.index(self.size)])
    }

    /// The cell at `position`.
    ///
    /// Panics if `position` is off the board; that is a caller bug, not a game state.
    pub fn cell(&self, position: Position) -> &Cell {
        assert!(
            position.in_bounds(self.size),
            "position {position} is outside the {n}x{n} board",
            n = self.size
        );
        &self.cells[position.index(self.size)]
    }

    fn cell_mut(&mut self, position: Position) -> &mut Cell {
        assert!(
            position.in_bounds(self.size),
            "position {position} is outside the {n}x{n} board",
            n = self.size
        );
        let idx = position.index(self.size);
        &mut self.cells[idx]
    }

    /// Whether the piece at `position` may be picked up by the active player.
    pub fn is_available_to_move(&self, position: Position) -> bool {
        self.get(position).is_some_and(|cell| {
            cell.is_turn(self.player) && !cell.possible_movements(self).is_empty()
        })
    }

    /// Destinations to highlight for the piece at `position`.
    pub fn possible_movements(&self, position: Position) -> Vec<Position> {
        self.get(position)
            .map(|cell| cell.possible_movements(self))
            .unwrap_or_default()
    }

    /// Moves the piece on `from` to `to` if that is legal right now.
    ///
    /// On success exactly these things change: the origin is cleared, the
    /// destination is set, a jumped piece (if any) is removed, one history entry
    /// is appended, the move counter advances on red's moves, the turn passes
    /// and newly eligible men are crowned. On failure nothing changes.
    pub fn move_checker(&mut self, from: Position, to: Position) -> bool {
        if !from.in_bounds(self.size) || !to.in_bounds(self.size) {
            trace!("rejected {from} -> {to}: off the board");
            return false;
        }

        let mover = *self.cell(from);
        let Some(resolved) = mover.resolve_move(self, to) else {
            trace!("rejected {from} -> {to} for {}", self.player);
            return false;
        };

        let player = self.player;
        let captured = match resolved {
            ResolvedMove::Normal => Vec::new(),
            ResolvedMove::Capture(c) => vec![CapturedChecker {
                position: c.enemy,
                state: self.cell(c.enemy).state(),
            }],
        };

        self.add_history(HistoryEntry {
            player,
            state: mover.state(),
            from,
            to,
            captured,
        });

        self.cell_mut(to).set_state(mover.state());
        if let ResolvedMove::Capture(c) = resolved {
            self.cell_mut(c.enemy).set_state(CellState::Empty);
            debug!("{player} jumps {from} -> {to}, capturing {}", c.enemy);
        } else {
            debug!("{player} moves {from} -> {to}");
        }
        self.cell_mut(from).set_state(CellState::Empty);

        if player == Player::Red {
            self.number_of_moves += 1;
        }

        self.change_turn();
        self.update_cells();
        true
    }

    pub(crate) fn change_turn(&mut self) {
        self.player = self.player.other();
    }

    pub(crate) fn add_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Promotion sweep: crowns every man standing on its far row.
    pub fn update_cells(&mut self) {
        let size = self.size;
        for cell in self.cells.iter_mut() {
            if cell.promote_if_eligible(size) {
                info!("{:?} crowned at {}", cell.state(), cell.position());
            }
        }
    }

    /// Every square the active player could pick up, in row-major order.
    pub fn movable_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .map(Cell::position)
            .filter(|&p| self.is_available_to_move(p))
            .collect()
    }

    /// Each movable square of the active player with its destinations.
    pub fn legal_moves(&self) -> FxHashMap<Position, Vec<Position>> {
        self.cells
            .iter()
            .filter(|cell| cell.is_turn(self.player))
            .filter_map(|cell| {
                let moves = cell.possible_movements(self);
                (!moves.is_empty()).then(|| (cell.position(), moves))
            })
            .collect()
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_turn(player)).count()
    }

    /// The opponent, once the active player has nothing left to move.
    pub fn winner(&self) -> Option<Player> {
        let stuck = self
            .cells
            .iter()
            .filter(|cell| cell.is_turn(self.player))
            .all(|cell| cell.possible_movements(self).is_empty());
        stuck.then(|| self.player.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_fills_three_rows_each_side() {
        let board = Board::default();
        assert_eq!(board.size(), 8);
        assert_eq!(board.player(), Player::Blue);
        assert_eq!(board.number_of_moves(), 0);
        assert!(board.history().is_empty());
        assert_eq!(board.piece_count(Player::Blue), 12);
        assert_eq!(board.piece_count(Player::Red), 12);

        for cell in board.cells() {
            if !cell.is_empty() {
                assert!(cell.position().is_playable(), "{}", cell.position());
            }
            match cell.row() {
                0..=2 => assert!(cell.is_empty() || cell.is_blue()),
                3 | 4 => assert!(cell.is_empty()),
                _ => assert!(cell.is_empty() || cell.is_red()),
            }
        }
    }

    #[test]
    fn only_front_row_is_movable_at_start() {
        let board = Board::default();
        let movable = board.movable_positions();
        assert_eq!(
            movable,
            vec![
                Position::new(2, 0),
                Position::new(2, 2),
                Position::new(2, 4),
                Position::new(2, 6),
            ]
        );
        assert_eq!(board.legal_moves().len(), 4);
        assert_eq!(
            board.legal_moves()[&Position::new(2, 0)],
            vec![Position::new(3, 1)]
        );
    }

    #[test]
    fn red_may_open_when_configured() {
        let cfg = GameConfig::default().with_first_player(Player::Red);
        let board = Board::new(cfg).unwrap();
        assert_eq!(board.player(), Player::Red);
        assert!(board.is_available_to_move(Position::new(5, 1)));
        assert!(!board.is_available_to_move(Position::new(2, 0)));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = GameConfig::default().with_board_size(1);
        assert!(matches!(
            Board::new(cfg),
            Err(GameError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn change_turn_flips_unconditionally() {
        let mut board = Board::default();
        board.change_turn();
        assert_eq!(board.player(), Player::Red);
        board.change_turn();
        assert_eq!(board.player(), Player::Blue);
    }

    #[test]
    fn get_is_none_off_board() {
        let board = Board::default();
        assert!(board.get(Position::new(8, 0)).is_none());
        assert!(board.get(Position::new(7, 7)).is_some());
        assert!(!board.is_available_to_move(Position::new(0, 9)));
        assert!(board.possible_movements(Position::new(9, 9)).is_empty());
    }

    #[test]
    #[should_panic(expected = "outside the 8x8 board")]
    fn cell_panics_off_board() {
        let board = Board::default();
        board.cell(Position::new(0, 8));
    }

    #[test]
    fn from_layout_validates_squares() {
        let cfg = GameConfig::default();
        let bad = [
            (Position::new(8, 0), CellState::BlueMan),
            (Position::new(0, 1), CellState::BlueMan),
            (Position::new(0, 0), CellState::Empty),
        ];
        for piece in bad {
            assert!(matches!(
                Board::from_layout(cfg, Player::Blue, &[piece]),
                Err(GameError::InvalidLayout { .. })
            ));
        }

        let dup = [
            (Position::new(2, 2), CellState::BlueMan),
            (Position::new(2, 2), CellState::RedMan),
        ];
        assert!(Board::from_layout(cfg, Player::Blue, &dup).is_err());
    }

    #[test]
    fn from_layout_crowns_men_already_home() {
        let board = Board::from_layout(
            GameConfig::default(),
            Player::Blue,
            &[
                (Position::new(7, 1), CellState::BlueMan),
                (Position::new(0, 0), CellState::RedMan),
            ],
        )
        .unwrap();
        assert!(board.cell(Position::new(7, 1)).is_king());
        assert!(board.cell(Position::new(0, 0)).is_king());
    }

    #[test]
    fn winner_when_side_to_move_has_no_pieces() {
        let board = Board::from_layout(
            GameConfig::default(),
            Player::Red,
            &[(Position::new(3, 3), CellState::BlueMan)],
        )
        .unwrap();
        assert_eq!(board.winner(), Some(Player::Blue));
        assert_eq!(Board::default().winner(), None);
    }
}
