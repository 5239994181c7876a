use crate::board::board_types::{ChessMove, Color, PieceKind, Square};
use crate::board::position::Position;
use crate::moves::attack_tables::AttackTables;

/// Pseudo-legal knight destinations: the precomputed jump mask minus squares
/// the mover's own side occupies. Enemy-held destinations stay in (captures).
pub fn generate_knight_moves(
    position: &Position,
    tables: &AttackTables,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let own_occ = position.occupancy_by_color[side.index()];
    let reachable = tables.knight[from as usize] & !own_occ;

    for to in reachable.squares() {
        out.push(ChessMove::new(from, to, PieceKind::Knight));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::board::board_types::{ChessMove, Color, PieceKind};
    use crate::board::position::Position;
    use crate::moves::attack_tables::AttackTables;

    fn moves_from(position: &Position, from: u8) -> Vec<ChessMove> {
        let tables = AttackTables::new();
        let mut out = Vec::new();
        generate_knight_moves(position, &tables, Color::Light, from, &mut out);
        out
    }

    #[test]
    fn knight_alone_on_a1_reaches_c2_and_b3() {
        let position = Position::from_squares([(0, Color::Light, PieceKind::Knight)]);
        let moves = moves_from(&position, 0);
        assert_eq!(
            moves,
            vec![
                ChessMove::new(0, 10, PieceKind::Knight),
                ChessMove::new(0, 17, PieceKind::Knight),
            ]
        );
    }

    #[test]
    fn friendly_pieces_block_destinations_but_enemies_do_not() {
        let position = Position::from_squares([
            (0, Color::Light, PieceKind::Knight),
            (10, Color::Light, PieceKind::Pawn),
            (17, Color::Dark, PieceKind::Pawn),
        ]);
        let moves = moves_from(&position, 0);
        assert_eq!(moves, vec![ChessMove::new(0, 17, PieceKind::Knight)]);
    }
}
