use crate::board::board_types::{ChessMove, Color, PieceKind, Square};
use crate::board::position::Position;
use crate::moves::attack_tables::AttackTables;

/// Pseudo-legal king destinations: the precomputed step mask minus squares
/// the mover's own side occupies. No castling and no safety filtering here;
/// a destination attacked by the enemy is still emitted.
pub fn generate_king_moves(
    position: &Position,
    tables: &AttackTables,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let own_occ = position.occupancy_by_color[side.index()];
    let reachable = tables.king[from as usize] & !own_occ;

    for to in reachable.squares() {
        out.push(ChessMove::new(from, to, PieceKind::King));
    }
}
