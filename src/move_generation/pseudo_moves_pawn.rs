use crate::board::board_types::{ChessMove, Color, PieceKind, Square};
use crate::board::position::Position;

/// Pseudo-legal pawn destinations: single push, double push from the start
/// rank, and diagonal captures against the enemy aggregate.
///
/// The double push is only offered once the single-push square has already
/// qualified as empty. The capture rank is bound-checked on its own rather
/// than piggybacking on the push check. No en passant; a pawn reaching the
/// back rank is emitted as an ordinary pawn move with no promotion.
pub fn generate_pawn_moves(
    position: &Position,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let rank = (from / 8) as i32;
    let file = (from % 8) as i32;
    let (direction, start_rank) = match side {
        Color::Light => (1, 1),
        Color::Dark => (-1, 6),
    };
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];

    let push_rank = rank + direction;
    if (0..8).contains(&push_rank) {
        let to = (push_rank * 8 + file) as Square;
        if !position.occupancy_all.contains(to) {
            out.push(ChessMove::new(from, to, PieceKind::Pawn));

            if rank == start_rank {
                let double_to = ((rank + 2 * direction) * 8 + file) as Square;
                if !position.occupancy_all.contains(double_to) {
                    out.push(ChessMove::new(from, double_to, PieceKind::Pawn));
                }
            }
        }
    }

    let capture_rank = rank + direction;
    if (0..8).contains(&capture_rank) {
        for file_delta in [-1, 1] {
            let capture_file = file + file_delta;
            if !(0..8).contains(&capture_file) {
                continue;
            }
            let to = (capture_rank * 8 + capture_file) as Square;
            if enemy_occ.contains(to) {
                out.push(ChessMove::new(from, to, PieceKind::Pawn));
            }
        }
    }
}
