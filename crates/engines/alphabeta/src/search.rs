use rand::Rng;

use tablut_core::{legal_moves, Board, Move, Side};

use crate::eval::static_score;

const INFTY: i32 = i32::MAX;

/// Pick a move for the side to move on BOARD by searching DEPTH plies
/// ahead, or `None` when that side has no legal move. Scores are absolute
/// (positive favors the defender): the defender's levels maximize, the
/// attacker's minimize, the sense flipping at every recursion. Among the
/// root moves tied for the best score, one is chosen uniformly at random
/// from RNG.
///
/// The board is cloned once; the search mutates the clone through
/// make/undo only, so the caller's board is untouched.
pub fn pick_best_move<R: Rng>(
    board: &Board,
    depth: u8,
    rng: &mut R,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut b = board.clone();
    let side = b.turn();
    let sense: i32 = match side {
        Side::Defender => 1,
        Side::Attacker => -1,
    };

    let moves = legal_moves(&b, side);
    if moves.is_empty() {
        return None;
    }

    let mut alpha = -INFTY;
    let mut beta = INFTY;
    let mut best = -sense * INFTY;
    let mut tied: Vec<Move> = Vec::new();

    for mv in moves {
        b.make_move(mv);
        *nodes += 1;
        let response = minimax(&mut b, depth.saturating_sub(1), -sense, alpha, beta, nodes);
        // Undo before any pruning break, so every make is paired.
        b.undo();

        let improved = if sense == 1 {
            response > best
        } else {
            response < best
        };
        if improved {
            tied.clear();
        }
        if improved || response == best {
            tied.push(mv);
            best = response;
        }
        if sense == 1 {
            alpha = alpha.max(response);
        } else {
            beta = beta.min(response);
        }
        if beta <= alpha {
            break;
        }
    }

    let choice = tied[rng.gen_range(0..tied.len())];
    Some((choice, best))
}

/// Value of BOARD searched DEPTH plies deep with SENSE choosing whether
/// this level maximizes (+1) or minimizes (-1). Non-root levels track
/// scores only; move identity is discarded.
fn minimax(
    board: &mut Board,
    depth: u8,
    sense: i32,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || board.winner().is_some() {
        return static_score(board, depth);
    }

    let moves = legal_moves(board, board.turn());
    if sense == 1 {
        let mut best = -INFTY;
        for mv in moves {
            board.make_move(mv);
            *nodes += 1;
            let response = minimax(board, depth - 1, -1, alpha, beta, nodes);
            board.undo();
            best = best.max(response);
            alpha = alpha.max(response);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFTY;
        for mv in moves {
            board.make_move(mv);
            *nodes += 1;
            let response = minimax(board, depth - 1, 1, alpha, beta, nodes);
            board.undo();
            best = best.min(response);
            beta = beta.min(response);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
