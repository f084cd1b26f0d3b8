//! Invariants checked along deterministic pseudo-random games.

use checkers_engine::board::Board;
use checkers_engine::config::GameConfig;
use checkers_engine::core::piece::{CellState, Player};
use checkers_engine::core::position::Position;

const MAX_PLIES: usize = 300;

/// Small LCG so the games are reproducible without extra dependencies.
fn next(seed: &mut u64) -> usize {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*seed >> 33) as usize
}

fn check_move_sets(board: &Board) {
    for cell in board.cells() {
        let normals = cell.possible_normal_movements(board);
        for &to in &normals {
            assert!(board.cell(to).is_empty(), "normal move onto occupied {to}");
        }

        let captures = cell.possible_capture_movements(board);
        for c in &captures {
            assert!(board.cell(c.landing).is_empty());
            assert!(cell.is_enemy_of(board.cell(c.enemy)));
        }

        let all = cell.possible_movements(board);
        if captures.is_empty() {
            assert_eq!(all, normals);
        } else {
            let landings: Vec<Position> = captures.iter().map(|c| c.landing).collect();
            assert_eq!(all, landings);
        }

        if !cell.is_turn(board.player()) {
            assert!(all.is_empty());
        }
        assert_eq!(board.is_available_to_move(cell.position()), !all.is_empty());
    }
}

fn check_crowning(board: &Board) {
    let n = board.size();
    for cell in board.cells() {
        match cell.state() {
            CellState::BlueMan => assert_ne!(cell.row(), n - 1),
            CellState::RedMan => assert_ne!(cell.row(), 0),
            _ => {}
        }
        if !cell.is_empty() {
            assert!(cell.position().is_playable());
        }
    }
}

fn play(config: GameConfig, mut seed: u64) {
    let mut board = Board::new(config).unwrap();

    for _ in 0..MAX_PLIES {
        check_move_sets(&board);
        check_crowning(&board);

        let movable = board.movable_positions();
        if movable.is_empty() {
            assert_eq!(board.winner(), Some(board.player().other()));
            return;
        }
        assert_eq!(board.winner(), None);

        let from = movable[next(&mut seed) % movable.len()];

        // A rejected request must not change anything.
        let before = board.clone();
        assert!(!board.move_checker(from, from));
        assert_eq!(board.cells(), before.cells());
        assert_eq!(board.player(), before.player());
        assert_eq!(board.history().len(), before.history().len());

        let targets = board.possible_movements(from);
        let to = targets[next(&mut seed) % targets.len()];
        let mover = board.cell(from).state();
        let kings_before: Vec<Position> = board
            .cells()
            .iter()
            .filter(|c| c.is_king())
            .map(|c| c.position())
            .collect();

        assert!(board.move_checker(from, to));

        assert_eq!(board.player(), before.player().other());
        assert_eq!(board.history().len(), before.history().len() + 1);
        let expected_moves = before.number_of_moves() + u32::from(before.player() == Player::Red);
        assert_eq!(board.number_of_moves(), expected_moves);

        let entry = board.history().last().unwrap();
        assert_eq!(entry.player, before.player());
        assert_eq!(entry.state, mover);
        assert!(board.cell(from).is_empty());
        assert_eq!(board.cell(to).owner(), Some(before.player()));

        let changed: Vec<Position> = board
            .cells()
            .iter()
            .zip(before.cells())
            .filter(|(now, was)| now.state() != was.state())
            .map(|(now, _)| now.position())
            .collect();
        let expected_changes = 2 + entry.captured.len();
        assert_eq!(changed.len(), expected_changes, "changed squares: {changed:?}");
        for c in &entry.captured {
            assert!(board.cell(c.position).is_empty());
            assert_eq!(before.cell(c.position).state(), c.state);
        }

        // Kings never turn back into men; the one that moved now sits on `to`.
        for pos in kings_before {
            if pos == from {
                assert!(board.cell(to).is_king());
            } else if !entry.captured.iter().any(|c| c.position == pos) {
                assert!(board.cell(pos).is_king());
            }
        }
    }
}

#[test]
fn random_games_on_standard_board() {
    for seed in 0..40u64 {
        play(GameConfig::default(), seed);
    }
}

#[test]
fn random_games_with_red_first() {
    for seed in 100..120u64 {
        play(GameConfig::default().with_first_player(Player::Red), seed);
    }
}

#[test]
fn random_games_on_other_sizes() {
    for seed in 0..10u64 {
        play(GameConfig::new(6, 2, Player::Blue), seed);
        play(GameConfig::new(10, 4, Player::Blue), seed);
    }
}
