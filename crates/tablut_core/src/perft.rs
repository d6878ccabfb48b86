use crate::board::Board;
use crate::movegen::legal_moves_into;
use crate::types::Move;

/// Pure perft node count.
/// Counts all legal move sequences from the current position down to
/// `depth`, treating decided positions as leaves. Exercises the
/// make/undo round-trip at every interior node.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || board.winner().is_some() {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        buf.clear();
        let side = board.turn();
        legal_moves_into(board, side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            board.make_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.undo();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(128); depth as usize];
    inner(board, depth, &mut layers[..])
}
