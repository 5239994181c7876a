//! Bitboard position model and pseudo-legal move generation.
//!
//! This crate covers the move-rule core of a chess program: per-color and
//! per-kind occupancy bitboards rebuilt on demand from an external board,
//! precomputed leaper attack tables, and pseudo-legal destination generation
//! for pawns, knights, and kings. Legality filtering (king safety), castling,
//! en passant, promotion, and slider movement are the surrounding engine's
//! concern and are not implemented here.

pub mod board {
    pub mod bitboard;
    pub mod board_types;
    pub mod position;
}

pub mod moves {
    pub mod attack_tables;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
}

pub mod utils {
    pub mod algebraic;
}
