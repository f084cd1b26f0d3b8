//! A rules engine for checkers (draughts) on an N×N board.
//!
//! The engine owns the board, decides which pieces may move and where, executes
//! moves (plain steps and single jumps), crowns kings and keeps a move history.
//! A presentation layer needs only [`board::Board::is_available_to_move`],
//! [`board::Board::possible_movements`] and [`board::Board::move_checker`].

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod rules;
