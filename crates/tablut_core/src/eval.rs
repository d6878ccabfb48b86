use crate::board::Board;
use crate::square::Square;
use crate::types::Piece;

/// Material weight of each attacker soldier.
pub const ATTACKER_WEIGHT: i32 = -10;
/// Material weight of each defender soldier. The king is not counted.
pub const DEFENDER_WEIGHT: i32 = 5;

/// Material balance of the position, positive in the defender's favor.
/// Counts the pieces actually on the board; no positional term.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for sq in Square::all() {
        match board.get(sq) {
            Piece::Attacker => score += ATTACKER_WEIGHT,
            Piece::Defender => score += DEFENDER_WEIGHT,
            Piece::King | Piece::Empty => {}
        }
    }
    score
}
