//! Per-color occupancy bitboards rebuilt on demand.
//!
//! `Position` mirrors whatever board the surrounding program maintains. It is
//! rebuilt from scratch before every move-generation query instead of being
//! updated incrementally, which keeps it correct under arbitrary external
//! board mutation at the cost of an O(64) scan per query.
//!
//! Only pawn, knight, and king occupancy get per-kind boards; bishops, rooks,
//! and queens appear in the side aggregates alone since their move rules are
//! not implemented.

use crate::board::bitboard::Bitboard;
use crate::board::board_types::{Color, PieceKind, Square};

/// What the bitboards record about an occupied square.
///
/// `Slider` means the square is held by a bishop, rook, or queen: present in
/// its side's aggregate but in no per-kind board, so the exact kind is not
/// recoverable from the position alone. Keeping the variant distinct from
/// emptiness lets callers tell "no moves exist" apart from "moves are not
/// implemented for this piece".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Pawn,
    Knight,
    King,
    Slider,
}

/// Occupancy bitboards for one board snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    // Per-kind boards, indexed by Color::index().
    pub pawns: [Bitboard; 2],
    pub knights: [Bitboard; 2],
    pub kings: [Bitboard; 2],

    // Occupancy caches.
    pub occupancy_by_color: [Bitboard; 2],
    pub occupancy_all: Bitboard,
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Build a fresh position from an occupied-square listing.
    pub fn from_squares<I>(squares: I) -> Self
    where
        I: IntoIterator<Item = (Square, Color, PieceKind)>,
    {
        let mut position = Self::default();
        position.rebuild_from(squares);
        position
    }

    /// Clear every board and repopulate from an occupied-square listing.
    ///
    /// Each item is one occupied square; a square must appear at most once.
    /// The square's mask is ORed into its side's aggregate and, for pawns,
    /// knights, and kings, into the matching per-kind board. Both aggregates
    /// are then ORed into `occupancy_all`.
    pub fn rebuild_from<I>(&mut self, squares: I)
    where
        I: IntoIterator<Item = (Square, Color, PieceKind)>,
    {
        *self = Self::default();

        for (square, color, piece) in squares {
            debug_assert!(square < 64, "square index out of range: {square}");
            debug_assert!(
                !self.occupancy_all.contains(square),
                "square {square} listed twice"
            );

            let mask = Bitboard::from_square(square);
            let side = color.index();
            self.occupancy_by_color[side] |= mask;
            match piece {
                PieceKind::Pawn => self.pawns[side] |= mask,
                PieceKind::Knight => self.knights[side] |= mask,
                PieceKind::King => self.kings[side] |= mask,
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {}
            }
            self.occupancy_all |= mask;
        }

        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }

    /// Which side holds `square`, if any.
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        if self.occupancy_by_color[Color::Light.index()].contains(square) {
            Some(Color::Light)
        } else if self.occupancy_by_color[Color::Dark.index()].contains(square) {
            Some(Color::Dark)
        } else {
            None
        }
    }

    /// The occupant of `square` as recorded by the bitboards, if any.
    pub fn occupant_on(&self, square: Square) -> Option<(Color, Occupant)> {
        let color = self.color_on(square)?;
        let side = color.index();
        let occupant = if self.pawns[side].contains(square) {
            Occupant::Pawn
        } else if self.knights[side].contains(square) {
            Occupant::Knight
        } else if self.kings[side].contains(square) {
            Occupant::King
        } else {
            Occupant::Slider
        };
        Some((color, occupant))
    }
}
