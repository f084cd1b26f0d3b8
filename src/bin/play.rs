use std::io::{self, Write};
use std::path::PathBuf;

use checkers_engine::board::Board;
use checkers_engine::config::GameConfig;
use checkers_engine::core::piece::Player;
use checkers_engine::core::position::Position;
use checkers_engine::record::write_record;

const USAGE: &str =
    "Usage: play [--size <N>] [--rows <R>] [--first blue|red] [--record <path.json>]";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = GameConfig::default();
    let mut record_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "--help" || flag == "-h" {
            println!("{USAGE}");
            return;
        }
        let Some(value) = args.get(i + 1) else {
            eprintln!("{flag} requires an argument\n{USAGE}");
            std::process::exit(2);
        };
        match flag {
            "--size" => config.board_size = parse_usize(flag, value),
            "--rows" => config.piece_rows = parse_usize(flag, value),
            "--first" => {
                config.first_player = match value.as_str() {
                    "blue" => Player::Blue,
                    "red" => Player::Red,
                    _ => {
                        eprintln!("--first requires 'blue' or 'red'");
                        std::process::exit(2);
                    }
                };
            }
            "--record" => record_path = Some(PathBuf::from(value)),
            x => {
                eprintln!("Unknown option: {x}\n{USAGE}");
                std::process::exit(2);
            }
        }
        i += 2;
    }

    let mut board = match Board::new(config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    print_help();

    loop {
        render(&board);

        if let Some(winner) = board.winner() {
            log::info!("game over after {} moves", board.history().len());
            println!("{} cannot move. {winner} wins.", board.player());
            break;
        }

        print!("{} to move > ", board.player());
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["help"] => print_help(),
            ["quit"] | ["exit"] | ["q"] => break,
            ["history"] => print_history(&board),
            ["movable"] => {
                let movable = board.movable_positions();
                println!("movable: {}", join(&movable));
            }
            ["moves", at] => match at.parse::<Position>() {
                Ok(p) => println!("{p}: {}", join(&board.possible_movements(p))),
                Err(e) => println!("{e}"),
            },
            [from, to] => {
                let (from, to) = match (from.parse::<Position>(), to.parse::<Position>()) {
                    (Ok(f), Ok(t)) => (f, t),
                    (Err(e), _) | (_, Err(e)) => {
                        println!("{e}");
                        continue;
                    }
                };
                if !board.is_available_to_move(from) {
                    println!("{from} cannot move for {}.", board.player());
                } else if !board.move_checker(from, to) {
                    println!(
                        "Illegal move {from} -> {to}. Try: {}",
                        join(&board.possible_movements(from))
                    );
                }
            }
            _ => println!("Unknown input '{}'. Type 'help' for commands.", line.trim()),
        }
    }

    if let Some(path) = record_path {
        match write_record(&path, &board) {
            Ok(()) => println!("Wrote game record to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write record: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn parse_usize(flag: &str, v: &str) -> usize {
    match v.parse() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("invalid {flag} {v}: {e}");
            std::process::exit(2);
        }
    }
}

fn join(positions: &[Position]) -> String {
    if positions.is_empty() {
        return "-".to_string();
    }
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_help() {
    println!("Commands:");
    println!("  <row,col> <row,col>   move a piece, e.g. '2,2 3,3'");
    println!("  moves <row,col>       list destinations for a piece");
    println!("  movable               list pieces that can move");
    println!("  history               show the moves so far");
    println!("  help | quit");
    println!("Pieces: b/r men, B/R kings. Blue moves down, red moves up.");
}

fn render(board: &Board) {
    print!("   ");
    for col in 0..board.size() {
        print!("{col:>2}");
    }
    println!();
    for (row, cells) in board.rows().enumerate() {
        print!("{row:>2} ");
        for cell in cells {
            let ch = if cell.is_empty() && !cell.position().is_playable() {
                ' '
            } else {
                cell.state().glyph()
            };
            print!(" {ch}");
        }
        println!();
    }
    println!(
        "blue: {}  red: {}  red moves: {}",
        board.piece_count(Player::Blue),
        board.piece_count(Player::Red),
        board.number_of_moves()
    );
}

fn print_history(board: &Board) {
    if board.history().is_empty() {
        println!("No moves yet.");
        return;
    }
    for (n, entry) in board.history().iter().enumerate() {
        let captures = entry
            .captured
            .iter()
            .map(|c| format!(" (took {})", c.position))
            .collect::<String>();
        println!(
            "{:>3}. {:<4} {:?} {} {} {}{captures}",
            n + 1,
            entry.player,
            entry.state,
            entry.from,
            if entry.is_capture() { "x" } else { "->" },
            entry.to
        );
    }
}
