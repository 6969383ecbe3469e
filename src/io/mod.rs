//! Loading boards from files.

pub mod board_file;

pub use board_file::{load_board, parse_board};
