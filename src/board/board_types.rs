//! Core board vocabulary shared across the crate.
//!
//! Squares are linear indices with `index = rank * 8 + file`, so `0 == a1`,
//! `7 == h1`, and `63 == h8`. Piece color and kind are stored separately;
//! a move record carries the moved kind but not its color, which is always
//! recoverable from the position it was generated against.

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A pseudo-legal move: origin, destination, and the kind that moved.
///
/// Captures are not flagged; a destination occupied by the enemy simply
/// appears alongside quiet destinations. Equality is structural over all
/// three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Self { from, to, piece }
    }
}
