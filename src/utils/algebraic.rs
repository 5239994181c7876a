//! Long-algebraic coordinate conversions.
//!
//! Bridges human-readable square names (for example `e4`) and the internal
//! `rank * 8 + file` index convention shared with the surrounding board
//! framework. Used mostly in tests and debugging output.

use crate::board::bitboard::Bitboard;
use crate::board::board_types::Square;

/// Convert long algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to long algebraic notation.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert long algebraic notation to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Result<Bitboard, String> {
    Ok(Bitboard::from_square(algebraic_to_square(square)?))
}
