use std::hash::Hash;
use std::ops::{Index, IndexMut};

pub mod chess;
mod fmt;
pub mod hoppers;
mod parse;
pub mod play;
pub mod solve;
pub mod strings;

pub use chess::{ChessConfig, Piece};
pub use fmt::Report;
pub use hoppers::{Cell, HoppersConfig, Jump};
pub use play::{MoveOutcome, Playable, Session, Step};
pub use solve::{bfs, solve, SearchResult};
pub use strings::StringsConfig;

/// One node of the implicit puzzle graph.
///
/// Equal configurations must produce equal `neighbors()`, in the same order.
/// The order is what breaks ties between shortest solutions.
pub trait Configuration: Clone + Eq + Hash {
    fn is_solution(&self) -> bool;

    /// Every configuration reachable by exactly one legal move.
    fn neighbors(&self) -> Vec<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub u8, pub u8);

impl Pos {
    pub fn row(self) -> u8 {
        self.0
    }

    pub fn col(self) -> u8 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    height: u8,
    width: u8,
    cells: Box<[T]>,
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;
    fn index(&self, pos: Pos) -> &Self::Output {
        let idx = pos.0 as usize * self.width as usize + pos.1 as usize;
        &self.cells[idx]
    }
}
impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let idx = pos.0 as usize * self.width as usize + pos.1 as usize;
        &mut self.cells[idx]
    }
}

impl<T> Grid<T> {
    /// Row-major cells. Panics unless there are exactly `height * width` of them.
    pub fn new(height: u8, width: u8, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), height as usize * width as usize);
        Self {
            height,
            width,
            cells: cells.into(),
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.0 < self.height && pos.1 < self.width
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let idx_iter = std::iter::successors(Some(Pos(0, 0)), |&Pos(r, c)| {
            Some(if c + 1 < self.width {
                Pos(r, c + 1)
            } else {
                Pos(r.checked_add(1)?, 0)
            })
        });
        idx_iter.zip(self.cells.iter())
    }

    /// Step from `pos` by a signed delta, staying on the board.
    pub fn offset(&self, pos: Pos, (dr, dc): (i8, i8)) -> Option<Pos> {
        let r = pos.0.checked_add_signed(dr)?;
        let c = pos.1.checked_add_signed(dc)?;
        if self.height <= r || self.width <= c {
            return None;
        }
        Some(Pos(r, c))
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks` panics on zero.
        self.cells.chunks(self.width.max(1) as usize)
    }
}
