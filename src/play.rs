//! Step-by-step play on top of the search engine: user moves, hints and resets.

use log::info;

use crate::{ChessConfig, Configuration, HoppersConfig, Pos};

/// A configuration a player can act on directly.
pub trait Playable: Configuration {
    type Move;

    /// Apply `mv` by its geometry alone. Legality is decided by [`Session::try_move`].
    fn apply(&self, mv: &Self::Move) -> Option<Self>;
}

/// A move from one cell to another, which is all either board puzzle needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub from: Pos,
    pub to: Pos,
}

impl Playable for ChessConfig {
    type Move = Step;

    fn apply(&self, &Step { from, to }: &Step) -> Option<Self> {
        let board = self.board();
        if !board.contains(from) || !board.contains(to) || from == to {
            return None;
        }
        (board[from].is_some() && board[to].is_some()).then(|| self.capture(from, to))
    }
}

impl Playable for HoppersConfig {
    type Move = Step;

    fn apply(&self, &Step { from, to }: &Step) -> Option<Self> {
        let jump = self.jump_between(from, to)?;
        let pond = self.pond();
        (pond[jump.from].is_frog() && pond[jump.over].is_frog()).then(|| self.perform(jump))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Solved,
    Illegal,
    AlreadySolved,
    NoSolution,
    Reset,
}

/// The puzzle as a player sees it: where it started and where it stands now.
#[derive(Debug, Clone)]
pub struct Session<C> {
    initial: C,
    current: C,
}

impl<C: Playable> Session<C> {
    pub fn new(initial: C) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn current(&self) -> &C {
        &self.current
    }

    pub fn initial(&self) -> &C {
        &self.initial
    }

    fn advance(&mut self, next: C) -> MoveOutcome {
        self.current = next;
        if self.current.is_solution() {
            MoveOutcome::Solved
        } else {
            MoveOutcome::Moved
        }
    }

    pub fn try_move(&mut self, mv: &C::Move) -> MoveOutcome {
        match self.current.apply(mv) {
            Some(next) if self.current.neighbors().contains(&next) => self.advance(next),
            _ => MoveOutcome::Illegal,
        }
    }

    /// Take the first step of a shortest solution from the current configuration.
    pub fn hint(&mut self) -> MoveOutcome {
        if self.current.is_solution() {
            return MoveOutcome::AlreadySolved;
        }
        let result = crate::solve(self.current.clone());
        info!(
            "Hint search: {} total, {} unique",
            result.total_configs, result.unique_configs,
        );
        match result.path.and_then(|path| path.into_iter().nth(1)) {
            Some(next) => self.advance(next),
            None => MoveOutcome::NoSolution,
        }
    }

    pub fn reset(&mut self) -> MoveOutcome {
        self.current = self.initial.clone();
        MoveOutcome::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: (u8, u8), to: (u8, u8)) -> Step {
        Step {
            from: Pos(from.0, from.1),
            to: Pos(to.0, to.1),
        }
    }

    #[test]
    fn chess_capture() {
        let mut session = Session::new("2 2\nR .\n. B".parse::<ChessConfig>().unwrap());
        // Rook can't reach the bishop.
        assert_eq!(session.try_move(&step((0, 0), (1, 1))), MoveOutcome::Illegal);
        assert_eq!(session.try_move(&step((0, 0), (0, 1))), MoveOutcome::Illegal);
        assert_eq!(session.try_move(&step((1, 1), (0, 0))), MoveOutcome::Solved);
        assert_eq!(session.current().to_string(), "B .\n. .\n");
        assert_eq!(session.hint(), MoveOutcome::AlreadySolved);
        assert_eq!(session.reset(), MoveOutcome::Reset);
        assert_eq!(session.current(), session.initial());
    }

    #[test]
    fn hoppers_hint() {
        let mut session = Session::new("1 9\nR . G . . . G . .".parse::<HoppersConfig>().unwrap());
        assert_eq!(session.try_move(&step((0, 0), (0, 3))), MoveOutcome::Illegal);
        assert_eq!(session.hint(), MoveOutcome::Moved);
        assert_eq!(session.current().to_string(), ". . . . R . G . .\n");
        assert_eq!(session.try_move(&step((0, 4), (0, 8))), MoveOutcome::Solved);
    }

    #[test]
    fn hint_without_solution() {
        let mut session = Session::new("1 5\nG . G . .".parse::<HoppersConfig>().unwrap());
        assert_eq!(session.hint(), MoveOutcome::NoSolution);
        assert_eq!(session.current(), session.initial());
    }
}
