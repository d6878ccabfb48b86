//! Alpha-Beta Tablut Engine
//!
//! Depth-bounded minimax with alpha-beta pruning and material-based
//! evaluation. Equally-scored best moves at the root are broken uniformly
//! at random from an injected, seedable random source, so play does not
//! repeat itself between games unless a seed is fixed.

mod eval;
mod search;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tablut_core::{Board, Engine, SearchLimits, SearchResult};


/// Tablut engine using sense-folded minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth minimax with alpha-beta pruning
/// - Material evaluation plus depth-offset win scores
/// - Randomized choice among root moves tied for the best score
pub struct AlphaBetaEngine<R: Rng = StdRng> {
    rng: R,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine whose move choices are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AlphaBetaEngine<R> {
    /// Engine drawing its tie-break choices from RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }
}

impl Default for AlphaBetaEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> Engine for AlphaBetaEngine<R> {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome =
            search::pick_best_move(board, limits.depth, &mut self.rng, &mut self.nodes);

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::pick_best_move;
