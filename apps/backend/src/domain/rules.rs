//! Board constants shared by the write rules.

/// Number of squares on the board; positions and property ids live in `0..BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 40;

/// A player leaves jail after at most this many turns.
pub const MAX_JAIL_TURNS: i32 = 3;

/// Longest accepted player token name, in characters.
pub const MAX_SYMBOL_LEN: usize = 32;

pub fn is_on_board(square: i32) -> bool {
    (0..BOARD_SIZE).contains(&square)
}
