use tablut_core::{evaluate, Board, Side};

/// A position-score magnitude indicating a decided game: positive when the
/// defender has won, negative when the attacker has. The remaining search
/// depth is added on top so that wins found sooner outrank wins found
/// deeper, keeping the search from putting off a forced win.
pub(crate) const WINNING_VALUE: i32 = i32::MAX - 20;

/// Heuristic value of BOARD seen from DEPTH plies above the horizon.
pub(crate) fn static_score(board: &Board, depth: u8) -> i32 {
    match board.winner() {
        Some(Side::Defender) => WINNING_VALUE + depth as i32,
        Some(Side::Attacker) => -WINNING_VALUE - depth as i32,
        None => evaluate(board),
    }
}
