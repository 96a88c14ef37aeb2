//! Hoppers: frogs jump over one another on a pond of lily pads until no green frog is left.

use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::{Configuration, Grid, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Water,
    LilyPad,
    Red,
    Green,
}

impl Cell {
    pub fn is_frog(&self) -> bool {
        matches!(self, Self::Red | Self::Green)
    }
}

/// Axis-aligned skips, only taken from cells with even row and column.
const LONG_JUMPS: [(i8, i8); 4] = [(0, 4), (0, -4), (-4, 0), (4, 0)];

const SHORT_JUMPS: [(i8, i8); 4] = [(-2, 2), (-2, -2), (2, 2), (2, -2)];

/// A legal jump: where the frog lands and which frog it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    pub from: Pos,
    pub over: Pos,
    pub to: Pos,
}

#[derive(Debug, Clone, Eq)]
pub struct HoppersConfig {
    pond: Grid<Cell>,
    greens: usize,
}

// `greens` is a function of the pond.
impl PartialEq for HoppersConfig {
    fn eq(&self, other: &Self) -> bool {
        self.pond == other.pond
    }
}
impl Hash for HoppersConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pond.hash(state);
    }
}

impl HoppersConfig {
    pub fn new(pond: Grid<Cell>) -> Self {
        let greens = pond
            .cells()
            .filter(|(_, cell)| **cell == Cell::Green)
            .count();
        Self { pond, greens }
    }

    pub fn pond(&self) -> &Grid<Cell> {
        &self.pond
    }

    pub fn greens(&self) -> usize {
        self.greens
    }

    /// Jumps open to the frog on `from`, in generation order.
    pub fn jumps(&self, from: Pos) -> ArrayVec<Jump, 8> {
        let mut jumps = ArrayVec::new();
        if !self.pond[from].is_frog() {
            return jumps;
        }

        let even = from.0 % 2 == 0 && from.1 % 2 == 0;
        let deltas = LONG_JUMPS
            .iter()
            .filter(|_| even)
            .chain(SHORT_JUMPS.iter());
        for &(dr, dc) in deltas {
            let Some(to) = self.pond.offset(from, (dr, dc)) else {
                continue;
            };
            let Some(over) = self.pond.offset(from, (dr / 2, dc / 2)) else {
                continue;
            };
            if self.pond[to] == Cell::LilyPad && self.pond[over].is_frog() {
                jumps.push(Jump { from, over, to });
            }
        }
        jumps
    }

    /// The jump between `from` and `to` if the two cells are a jump apart, legal or not.
    pub fn jump_between(&self, from: Pos, to: Pos) -> Option<Jump> {
        if !self.pond.contains(from) || !self.pond.contains(to) {
            return None;
        }
        let dr = to.0 as i16 - from.0 as i16;
        let dc = to.1 as i16 - from.1 as i16;
        let is_jump = matches!((dr.abs(), dc.abs()), (2, 2) | (4, 0) | (0, 4));
        is_jump.then(|| Jump {
            from,
            over: Pos(
                ((from.0 as i16 + to.0 as i16) / 2) as u8,
                ((from.1 as i16 + to.1 as i16) / 2) as u8,
            ),
            to,
        })
    }

    pub(crate) fn perform(&self, jump: Jump) -> Self {
        let frog = self.pond[jump.from];
        let removed = self.pond[jump.over];
        assert!(frog.is_frog() && removed.is_frog());

        let mut pond = self.pond.clone();
        pond[jump.to] = frog;
        pond[jump.from] = Cell::LilyPad;
        pond[jump.over] = Cell::LilyPad;
        let greens = match removed {
            Cell::Green => self.greens - 1,
            _ => self.greens,
        };
        Self { pond, greens }
    }
}

impl Configuration for HoppersConfig {
    fn is_solution(&self) -> bool {
        self.greens == 0
    }

    fn neighbors(&self) -> Vec<Self> {
        self.pond
            .cells()
            .flat_map(|(from, _)| self.jumps(from))
            .map(|jump| self.perform(jump))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pond(s: &str) -> HoppersConfig {
        s.parse().unwrap()
    }

    #[test]
    fn short_jump_from_odd_cell() {
        let config = pond("4 4\n* . * .\n. R * .\n* . G *\n. * . .");
        assert_eq!(config.greens(), 1);
        let neighbors = config.neighbors();
        assert_eq!(
            neighbors,
            [pond("4 4\n* . * .\n. . * .\n* . . *\n. * . R")],
        );
        assert_eq!(neighbors[0].greens(), 0);
        assert!(neighbors[0].is_solution());
    }

    #[test]
    fn long_jump_only_from_even_cells() {
        let config = pond("1 5\nG . G . .");
        assert_eq!(
            config.jumps(Pos(0, 0)).as_slice(),
            [Jump {
                from: Pos(0, 0),
                over: Pos(0, 2),
                to: Pos(0, 4),
            }],
        );

        // Same row shape, but starting on an odd column.
        let config = pond("1 6\n. G . G . .");
        assert!(config.jumps(Pos(0, 1)).is_empty());
    }

    #[test]
    fn long_jump_vertical() {
        let config = pond("5 1\nG\n.\nR\n.\n.");
        assert_eq!(
            config.jumps(Pos(0, 0)).as_slice(),
            [Jump {
                from: Pos(0, 0),
                over: Pos(2, 0),
                to: Pos(4, 0),
            }],
        );

        let config = pond("5 1\n.\n.\nG\n.\nR");
        assert_eq!(
            config.jumps(Pos(4, 0)).as_slice(),
            [Jump {
                from: Pos(4, 0),
                over: Pos(2, 0),
                to: Pos(0, 0),
            }],
        );
    }

    #[test]
    fn jumping_red_keeps_green_count() {
        let config = pond("1 5\nG . R . .");
        let neighbors = config.neighbors();
        assert_eq!(neighbors, [pond("1 5\n. . . . G")]);
        assert_eq!(neighbors[0].greens(), 1);
        assert!(!neighbors[0].is_solution());
    }

    #[test]
    fn water_blocks_landing() {
        let config = pond("3 3\nG * *\n* G *\n* * *");
        assert!(config.neighbors().is_empty());
        assert!(!crate::solve(config).is_solved());
    }

    #[test]
    fn jump_between_geometry() {
        let config = pond("5 5\nG . . . .\n. . . . .\n. . . . .\n. . . . .\n. . . . .");
        assert_eq!(
            config.jump_between(Pos(0, 0), Pos(2, 2)).map(|jump| jump.over),
            Some(Pos(1, 1)),
        );
        assert_eq!(
            config.jump_between(Pos(4, 0), Pos(0, 0)).map(|jump| jump.over),
            Some(Pos(2, 0)),
        );
        assert_eq!(config.jump_between(Pos(0, 0), Pos(1, 2)), None);
        assert_eq!(config.jump_between(Pos(0, 0), Pos(0, 9)), None);
    }
}
