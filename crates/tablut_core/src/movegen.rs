use crate::board::{Board, THRONE};
use crate::square::{Square, ROOK_RAYS};
use crate::types::{Move, Piece, Side};

/// Generate all legal moves for SIDE, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(128);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves for SIDE into the provided buffer, reusing it
/// across calls. Enumeration order is fixed: squares in index order,
/// directions N, E, S, W, destinations nearest first. This order decides
/// which of several equally-scored moves the search meets first.
pub fn legal_moves_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for from in Square::all() {
        let piece = board.get(from);
        if piece.side() != Some(side) {
            continue;
        }
        for ray in &ROOK_RAYS[from.index()] {
            for &to in ray.squares() {
                if board.get(to) != Piece::Empty {
                    // First occupied square blocks the rest of the ray.
                    break;
                }
                if to == THRONE && piece != Piece::King {
                    // Only the king may stop on the throne; everyone else
                    // passes over it.
                    continue;
                }
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
