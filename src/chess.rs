//! Capture-only solitaire chess: every move captures a piece, and the puzzle is solved when
//! exactly one piece is left.

use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::{Configuration, Grid, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    King,
    Knight,
    Pawn,
    Bishop,
    Rook,
    Queen,
}

const PAWN_DELTAS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

impl Piece {
    pub const ALL: [Self; 6] = [
        Self::King,
        Self::Knight,
        Self::Pawn,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
    ];

    pub fn symbol(self) -> char {
        match self {
            Piece::King => 'K',
            Piece::Knight => 'N',
            Piece::Pawn => 'P',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|piece| piece.symbol() == ch)
    }

    /// Single-step offsets, for pieces that don't slide.
    fn deltas(self) -> &'static [(i8, i8)] {
        match self {
            Piece::King => &KING_DELTAS,
            Piece::Knight => &KNIGHT_DELTAS,
            Piece::Pawn => &PAWN_DELTAS,
            _ => &[],
        }
    }

    /// Ray directions, for sliding pieces.
    fn slide_dirs(self) -> &'static [(i8, i8)] {
        match self {
            Piece::Bishop => &BISHOP_DIRS,
            Piece::Rook => &ROOK_DIRS,
            Piece::Queen => &QUEEN_DIRS,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Eq)]
pub struct ChessConfig {
    board: Grid<Option<Piece>>,
    pieces: usize,
}

// `pieces` is a function of the board.
impl PartialEq for ChessConfig {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}
impl Hash for ChessConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl ChessConfig {
    pub fn new(board: Grid<Option<Piece>>) -> Self {
        let pieces = board.cells().filter(|(_, cell)| cell.is_some()).count();
        Self { board, pieces }
    }

    pub fn board(&self) -> &Grid<Option<Piece>> {
        &self.board
    }

    pub fn pieces(&self) -> usize {
        self.pieces
    }

    /// Cells the piece standing on `from` may capture, in generation order.
    pub fn capture_targets(&self, from: Pos) -> ArrayVec<Pos, 8> {
        let mut targets = ArrayVec::new();
        let Some(piece) = self.board[from] else {
            return targets;
        };

        for &delta in piece.deltas() {
            if let Some(to) = self.board.offset(from, delta) {
                if self.board[to].is_some() {
                    targets.push(to);
                }
            }
        }

        for &dir in piece.slide_dirs() {
            let mut cur = from;
            while let Some(next) = self.board.offset(cur, dir) {
                // Pieces are never jumped over.
                if self.board[next].is_some() {
                    targets.push(next);
                    break;
                }
                cur = next;
            }
        }

        targets
    }

    /// The piece on `from` takes the one on `to`. Both cells must be occupied.
    pub(crate) fn capture(&self, from: Pos, to: Pos) -> Self {
        assert!(self.board[from].is_some() && self.board[to].is_some());
        let mut board = self.board.clone();
        let piece = board[from].take();
        board[to] = piece;
        Self {
            board,
            pieces: self.pieces - 1,
        }
    }
}

impl Configuration for ChessConfig {
    fn is_solution(&self) -> bool {
        self.pieces == 1
    }

    fn neighbors(&self) -> Vec<Self> {
        self.board
            .cells()
            .filter(|(_, cell)| cell.is_some())
            .flat_map(|(from, _)| {
                self.capture_targets(from)
                    .into_iter()
                    .map(move |to| self.capture(from, to))
            })
            .collect()
    }
}
