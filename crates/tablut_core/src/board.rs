use std::fmt;
use std::fmt::Write as _;

use thiserror::Error;

use crate::movegen;
use crate::square::{Square, NUM_SQUARES, SIZE};
use crate::types::{Move, Piece, Side};

/// The throne (center square) and its four orthogonal neighbors.
pub const THRONE: Square = Square::at(4, 4);
pub const NTHRONE: Square = Square::at(4, 5);
pub const STHRONE: Square = Square::at(4, 3);
pub const WTHRONE: Square = Square::at(3, 4);
pub const ETHRONE: Square = Square::at(5, 4);

/// Initial positions of the attackers: four clusters on the edge centers.
const INITIAL_ATTACKERS: [Square; 16] = [
    Square::at(0, 3),
    Square::at(0, 4),
    Square::at(0, 5),
    Square::at(1, 4),
    Square::at(8, 3),
    Square::at(8, 4),
    Square::at(8, 5),
    Square::at(7, 4),
    Square::at(3, 0),
    Square::at(4, 0),
    Square::at(5, 0),
    Square::at(4, 1),
    Square::at(3, 8),
    Square::at(4, 8),
    Square::at(5, 8),
    Square::at(4, 7),
];

/// Initial positions of the defenders: the cross around the throne.
const INITIAL_DEFENDERS: [Square; 8] = [
    NTHRONE,
    ETHRONE,
    STHRONE,
    WTHRONE,
    Square::at(4, 6),
    Square::at(4, 2),
    Square::at(2, 4),
    Square::at(6, 4),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("move limit of {limit} moves would not exceed the {played} plies already played")]
    MoveLimitTooLow { limit: u32, played: u32 },
}

/// One entry of the position history: side to move plus the full cell
/// contents. Two snapshots are equal iff the turn and every cell match,
/// which is the sole basis for repetition detection.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    turn: Side,
    cells: [Piece; NUM_SQUARES],
}

/// The state of a Tablut game.
///
/// The board is the single source of truth for legality, captures, and
/// terminal conditions. It is mutated only through `make_move`/`undo`;
/// `history` keeps one snapshot per ply (including the initial position),
/// so `undo` restores state exactly and `history.len() == move_count + 1`
/// always holds.
#[derive(Clone)]
pub struct Board {
    cells: [Piece; NUM_SQUARES],
    turn: Side,
    winner: Option<Side>,
    move_count: u32,
    /// Ply limit; `u32::MAX` means effectively unbounded.
    limit: u32,
    /// True when the current position ended the game as a repeat.
    repeated: bool,
    history: Vec<Snapshot>,
}

impl Board {
    /// A board in the standard initial position, attacker to move.
    pub fn new() -> Self {
        let mut cells = [Piece::Empty; NUM_SQUARES];
        for sq in INITIAL_ATTACKERS {
            cells[sq.index()] = Piece::Attacker;
        }
        for sq in INITIAL_DEFENDERS {
            cells[sq.index()] = Piece::Defender;
        }
        cells[THRONE.index()] = Piece::King;

        let mut board = Board {
            cells,
            turn: Side::Attacker,
            winner: None,
            move_count: 0,
            limit: u32::MAX,
            repeated: false,
            history: Vec::new(),
        };
        board.history.push(board.snapshot());
        board
    }

    /// A board built from a textual grid, used to set up positions in
    /// tests. LAYOUT holds nine whitespace-separated rows of nine `A`,
    /// `D`, `K`, or `-` characters, top row (row 9) first, matching the
    /// rendered form. The resulting position is a fresh baseline: history
    /// holds exactly its snapshot. Panics on malformed input.
    pub fn from_layout(layout: &str, turn: Side) -> Self {
        let rows: Vec<&str> = layout.split_whitespace().collect();
        assert!(rows.len() == SIZE as usize, "expected {} rows", SIZE);

        let mut cells = [Piece::Empty; NUM_SQUARES];
        for (i, row_str) in rows.iter().enumerate() {
            let row = SIZE - 1 - i as u8;
            assert!(
                row_str.chars().count() == SIZE as usize,
                "expected {} squares in row {}",
                SIZE,
                row + 1
            );
            for (col, c) in row_str.chars().enumerate() {
                let piece = Piece::from_char(c)
                    .unwrap_or_else(|| panic!("invalid piece char in layout: {}", c));
                cells[Square::at(col as u8, row).index()] = piece;
            }
        }

        let mut board = Board {
            cells,
            turn,
            winner: None,
            move_count: 0,
            limit: u32::MAX,
            repeated: false,
            history: Vec::new(),
        };
        board.history.push(board.snapshot());
        board
    }

    /// The side whose turn it is.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The winner, or `None` while the game is undecided.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Plies played since the baseline position that have not been undone.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The ply limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Limit the game to MOVES full moves (2 * MOVES plies). Rejected
    /// without state change when the limit would already be exhausted.
    pub fn set_move_limit(&mut self, moves: u32) -> Result<(), BoardError> {
        if moves.saturating_mul(2) <= self.move_count {
            return Err(BoardError::MoveLimitTooLow {
                limit: moves,
                played: self.move_count,
            });
        }
        self.limit = moves.saturating_mul(2);
        Ok(())
    }

    /// True iff the game ended because the current position is a repeat.
    pub fn repeated_position(&self) -> bool {
        self.repeated
    }

    /// The contents of square S.
    pub fn get(&self, s: Square) -> Piece {
        self.cells[s.index()]
    }

    fn put(&mut self, p: Piece, s: Square) {
        self.cells[s.index()] = p;
    }

    /// Location of the king, or `None` once it has been captured.
    pub fn king_position(&self) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Piece::King)
    }

    /// True iff FROM holds a piece of the side to move.
    pub fn is_legal_source(&self, from: Square) -> bool {
        self.get(from).side() == Some(self.turn)
    }

    /// True iff FROM-TO is an unblocked rook move on the current board:
    /// every square along the line past FROM, including TO, is empty.
    pub fn is_unblocked_move(&self, from: Square, to: Square) -> bool {
        if !from.is_rook_move(to) {
            return false;
        }
        let dir = from.direction(to);
        let mut steps = 1;
        while let Some(sq) = from.rook_move(dir, steps) {
            if self.get(sq) != Piece::Empty {
                return false;
            }
            if sq == to {
                return true;
            }
            steps += 1;
        }
        false
    }

    /// True iff FROM-TO is a legal move for the side to move.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.is_legal_source(from) && self.is_legal_no_turn(from, to)
    }

    /// True iff FROM-TO would be legal regardless of whose turn it is:
    /// the destination is empty, only the king may stop on the throne, and
    /// the line is unobstructed.
    pub fn is_legal_no_turn(&self, from: Square, to: Square) -> bool {
        if self.get(to) != Piece::Empty || (to == THRONE && self.get(from) != Piece::King) {
            return false;
        }
        self.is_unblocked_move(from, to)
    }

    /// True iff MV is a legal move in the current position.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from, mv.to)
    }

    /// All legal moves for SIDE, ignoring whose turn it is.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        movegen::legal_moves(self, side)
    }

    /// True iff SIDE has at least one legal move.
    pub fn has_move(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// Play MV, which must be legal (caller contract). Moves the piece,
    /// resolves captures around the destination, then evaluates terminal
    /// conditions in priority order: repetition, king captured, king on an
    /// edge, side to move immobile, move limit exhausted.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal_move(mv), "illegal move {}", mv);
        let piece = self.get(mv.from);
        self.put(piece, mv.to);
        self.put(Piece::Empty, mv.from);
        self.capture_around(mv.to);
        self.move_count += 1;
        self.turn = self.turn.opponent();
        self.history.push(self.snapshot());

        if self.check_repeated() {
            return;
        }
        match self.king_position() {
            None => {
                self.winner = Some(Side::Attacker);
                return;
            }
            Some(king) if king.is_edge() => {
                self.winner = Some(Side::Defender);
                return;
            }
            Some(_) => {}
        }
        if !self.has_move(self.turn) {
            self.winner = Some(self.turn.opponent());
        }
        // Limit exhaustion is scored for the side to move, not as a draw,
        // and it outranks an immobility result detected just above.
        if self.move_count > self.limit {
            self.winner = Some(self.turn);
        }
    }

    /// Undo one ply. Has no effect on the baseline position.
    pub fn undo(&mut self) {
        if self.move_count == 0 {
            return;
        }
        self.winner = None;
        self.repeated = false;
        self.history.pop();
        let top = self
            .history
            .last()
            .expect("history always holds the baseline position");
        self.turn = top.turn;
        self.cells = top.cells;
        self.move_count -= 1;
    }

    /// Commit the current position as the new baseline: discard every
    /// history entry below it, so earlier plies can no longer be undone or
    /// matched by repetition. Cells, turn, and winner are untouched.
    pub fn clear_undo(&mut self) {
        let top = *self
            .history
            .last()
            .expect("history always holds the baseline position");
        self.history.clear();
        self.history.push(top);
        self.move_count = 0;
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            cells: self.cells,
        }
    }

    /// Set the winner to the side now to move if the current position
    /// already occurred. Whichever side is about to move wins on a repeat,
    /// not the side that brought the position back.
    fn check_repeated(&mut self) -> bool {
        let repeated = {
            let (current, earlier) = self
                .history
                .split_last()
                .expect("history always holds the baseline position");
            earlier.contains(current)
        };
        if repeated {
            self.winner = Some(self.turn);
            self.repeated = true;
        }
        repeated
    }

    /// Capture every enemy piece sandwiched against a piece that just
    /// arrived at SQ, checking the four orthogonal directions.
    fn capture_around(&mut self, sq: Square) {
        for dir in 0..4 {
            if let Some(other) = sq.rook_move(dir, 2) {
                if self.is_capturable(sq, other) {
                    self.put(Piece::Empty, sq.between(other));
                }
            }
        }
    }

    /// True iff the piece between SQ and OTHER is captured, assuming a
    /// piece just arrived at SQ and OTHER is two rook steps away.
    fn is_capturable(&self, sq: Square, other: Square) -> bool {
        let between = sq.between(other);
        let victim = self.get(between);
        // A capture needs an enemy piece in the middle.
        if victim == Piece::Empty || victim.side() == self.get(sq).side() {
            return false;
        }
        if victim == Piece::King && Self::near_throne(between) {
            // On or beside the throne the king falls only to a full
            // encirclement: all four of its neighbors must be hostile.
            let flanked = match (sq.diag1(between), sq.diag2(between)) {
                (Some(d1), Some(d2)) => {
                    self.is_hostile(between, d1) && self.is_hostile(between, d2)
                }
                _ => false,
            };
            return flanked && self.is_hostile(between, sq) && self.is_hostile(between, other);
        }
        self.is_hostile(between, sq) && self.is_hostile(between, other)
    }

    /// True iff OTHER counts as a hostile boundary for the piece at
    /// VICTIM: it holds an enemy piece, or it is the empty throne, or it
    /// is the occupied throne with at least three attackers beside it.
    fn is_hostile(&self, victim: Square, other: Square) -> bool {
        let occupant = self.get(other);
        if occupant != Piece::Empty && occupant.side() != self.get(victim).side() {
            return true;
        }
        if other == THRONE && self.get(THRONE) == Piece::Empty {
            return true;
        }
        other == THRONE && self.get(THRONE) != Piece::Empty && self.is_throne_surrounded()
    }

    fn is_throne_surrounded(&self) -> bool {
        [NTHRONE, STHRONE, ETHRONE, WTHRONE]
            .iter()
            .filter(|&&sq| self.get(sq) == Piece::Attacker)
            .count()
            > 2
    }

    fn near_throne(sq: Square) -> bool {
        sq == THRONE || sq == NTHRONE || sq == STHRONE || sq == WTHRONE || sq == ETHRONE
    }

    /// Text rendering of the board, rows 9 down to 1. With COORDINATES,
    /// rank digits run along the left and file letters along the bottom.
    pub fn to_text(&self, coordinates: bool) -> String {
        let mut out = String::new();
        for row in (0..SIZE).rev() {
            if coordinates {
                let _ = write!(out, "{:2}", row + 1);
            } else {
                out.push_str("  ");
            }
            for col in 0..SIZE {
                out.push(' ');
                out.push(self.get(Square::at(col, row)).to_char());
            }
            out.push('\n');
        }
        if coordinates {
            out.push_str("  ");
            for col in 0..SIZE {
                out.push(' ');
                out.push((b'a' + col) as char);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text(true))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
