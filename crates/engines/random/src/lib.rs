//! Random Move Tablut Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Testing infrastructure before wiring in a real search
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tablut_core::{legal_moves, Board, Engine, SearchLimits, SearchResult};


/// A tablut engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. The random source is owned and
/// seedable, so games can be replayed exactly.
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine whose move choices are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(board, board.turn());

        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
