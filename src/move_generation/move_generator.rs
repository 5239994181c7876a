//! Pseudo-legal move generation entry point.
//!
//! Dispatches on the kind recorded for the origin square: pawns, knights, and
//! kings route to their piece modules; an empty origin yields an empty list;
//! a slider origin is a hard error so that "not implemented" can never be
//! mistaken for "no moves available".

use std::error::Error;
use std::fmt;

use crate::board::board_types::{ChessMove, Square};
use crate::board::position::{Occupant, Position};
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::moves::attack_tables::AttackTables;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// The origin square holds a bishop, rook, or queen, whose move rules
    /// are not implemented.
    SliderMovesNotImplemented(Square),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::SliderMovesNotImplemented(square) => {
                write!(f, "slider move generation is not implemented (square {square})")
            }
        }
    }
}

impl Error for MoveGenerationError {}

/// Generate every pseudo-legal move for the piece on `from`.
///
/// The mover's side is read from whichever aggregate board contains the
/// square. An empty origin is not an error; it produces an empty list.
/// `from` must be a valid square index (`0..=63`); out-of-range values are a
/// caller bug, checked only in debug builds.
pub fn generate_moves(
    position: &Position,
    tables: &AttackTables,
    from: Square,
) -> MoveGenResult<Vec<ChessMove>> {
    debug_assert!(from < 64, "square index out of range: {from}");

    let Some((side, occupant)) = position.occupant_on(from) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    match occupant {
        Occupant::Pawn => generate_pawn_moves(position, side, from, &mut out),
        Occupant::Knight => generate_knight_moves(position, tables, side, from, &mut out),
        Occupant::King => generate_king_moves(position, tables, side, from, &mut out),
        Occupant::Slider => return Err(MoveGenerationError::SliderMovesNotImplemented(from)),
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{generate_moves, MoveGenerationError};
    use crate::board::board_types::{Color, PieceKind};
    use crate::board::position::Position;
    use crate::moves::attack_tables::AttackTables;

    fn mixed_position() -> Position {
        Position::from_squares([
            (4, Color::Light, PieceKind::King),
            (8, Color::Light, PieceKind::Pawn),
            (11, Color::Light, PieceKind::Pawn),
            (1, Color::Light, PieceKind::Knight),
            (0, Color::Light, PieceKind::Rook),
            (3, Color::Light, PieceKind::Queen),
            (60, Color::Dark, PieceKind::King),
            (48, Color::Dark, PieceKind::Pawn),
            (18, Color::Dark, PieceKind::Knight),
            (58, Color::Dark, PieceKind::Bishop),
        ])
    }

    #[test]
    fn empty_origin_yields_empty_list_not_error() {
        let position = mixed_position();
        let tables = AttackTables::new();
        let moves = generate_moves(&position, &tables, 35).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn slider_origin_is_an_explicit_error() {
        let position = mixed_position();
        let tables = AttackTables::new();
        assert_eq!(
            generate_moves(&position, &tables, 0),
            Err(MoveGenerationError::SliderMovesNotImplemented(0))
        );
        assert_eq!(
            generate_moves(&position, &tables, 58),
            Err(MoveGenerationError::SliderMovesNotImplemented(58))
        );
    }

    #[test]
    fn dispatch_tags_moves_with_the_origin_kind() {
        let position = mixed_position();
        let tables = AttackTables::new();

        for mv in generate_moves(&position, &tables, 8).unwrap() {
            assert_eq!(mv.piece, PieceKind::Pawn);
        }
        for mv in generate_moves(&position, &tables, 1).unwrap() {
            assert_eq!(mv.piece, PieceKind::Knight);
        }
        for mv in generate_moves(&position, &tables, 60).unwrap() {
            assert_eq!(mv.piece, PieceKind::King);
        }
    }

    #[test]
    fn no_move_targets_its_own_origin_or_a_friendly_square() {
        let position = mixed_position();
        let tables = AttackTables::new();

        for from in 0..64u8 {
            let Ok(moves) = generate_moves(&position, &tables, from) else {
                continue;
            };
            let side = position.color_on(from);
            for mv in moves {
                assert_eq!(mv.from, from);
                assert_ne!(mv.to, from);
                assert_ne!(
                    position.color_on(mv.to),
                    side,
                    "move from {from} lands on a friendly square {}",
                    mv.to
                );
            }
        }
    }

    #[test]
    fn knight_capture_appears_without_a_capture_marker() {
        // Light knight on b1 can jump to the dark knight on c3.
        let position = mixed_position();
        let tables = AttackTables::new();
        let moves = generate_moves(&position, &tables, 1).unwrap();
        assert!(moves.iter().any(|mv| mv.to == 18));
    }

    #[test]
    fn legality_check_is_destination_membership() {
        // A collaborator accepts a proposed move A -> B iff B is among the
        // generated destinations for A.
        let position = mixed_position();
        let tables = AttackTables::new();
        let destinations: Vec<u8> = generate_moves(&position, &tables, 8)
            .unwrap()
            .iter()
            .map(|mv| mv.to)
            .collect();
        assert!(destinations.contains(&16));
        assert!(destinations.contains(&24));
        assert!(!destinations.contains(&17));
    }
}
