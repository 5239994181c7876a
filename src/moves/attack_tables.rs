//! Precomputed attack tables for the leaper pieces.
//!
//! Knights and kings move by a fixed offset set that blocking pieces cannot
//! interrupt, so their reachable squares from every origin are computed once
//! up front. Offsets that leave the board in either coordinate are dropped
//! rather than wrapped. The tables are an explicitly constructed value passed
//! by reference, not process-global state, so tests can build fresh copies.

use crate::board::bitboard::Bitboard;
use crate::board::board_types::{PieceKind, Square};

/// (rank delta, file delta) pairs for the knight's eight jumps.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// (rank delta, file delta) pairs for the king's eight steps.
const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Per-origin destination masks for each leaper kind, immutable once built.
#[derive(Debug, Clone)]
pub struct AttackTables {
    pub knight: [Bitboard; 64],
    pub king: [Bitboard; 64],
}

impl AttackTables {
    pub const fn new() -> Self {
        Self {
            knight: generate_leaper_attacks(KNIGHT_OFFSETS),
            king: generate_leaper_attacks(KING_OFFSETS),
        }
    }

    /// Attack mask for a leaper on `square`; `None` for non-leaper kinds.
    #[inline]
    pub const fn leaper_attacks(&self, piece: PieceKind, square: Square) -> Option<Bitboard> {
        match piece {
            PieceKind::Knight => Some(self.knight[square as usize]),
            PieceKind::King => Some(self.king[square as usize]),
            _ => None,
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

const fn generate_leaper_attacks(offsets: [(i32, i32); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i32;
        let file = (sq % 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < 8 {
            let to_rank = rank + offsets[i].0;
            let to_file = file + offsets[i].1;
            if to_rank >= 0 && to_rank < 8 && to_file >= 0 && to_file < 8 {
                attacks |= 1u64 << (to_rank * 8 + to_file);
            }
            i += 1;
        }

        table[sq] = Bitboard(attacks);
        sq += 1;
    }

    table
}
