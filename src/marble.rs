//! The two marbles and their per-sequence lifecycle.

use std::fmt;

use crate::core::coord::Coord;
use crate::core::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarbleKind {
    /// The marble that must reach the hole (`R`).
    Target,
    /// The marble that must stay out of the hole (`B`).
    Obstacle,
}

impl MarbleKind {
    pub fn symbol(self) -> char {
        match self {
            MarbleKind::Target => 'R',
            MarbleKind::Obstacle => 'B',
        }
    }
}

impl fmt::Display for MarbleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarbleKind::Target => write!(f, "target ({})", self.symbol()),
            MarbleKind::Obstacle => write!(f, "obstacle ({})", self.symbol()),
        }
    }
}

/// A marble: its role, live position, the position before its last single-cell step,
/// and the starting position every sequence attempt resets to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marble {
    pub kind: MarbleKind,
    pub pos: Coord,
    prev: Coord,
    start: Coord,
}

impl Marble {
    pub fn new(kind: MarbleKind, start: Coord) -> Self {
        Self {
            kind,
            pos: start,
            prev: start,
            start,
        }
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Advance one cell, remembering where we came from.
    #[inline]
    pub fn step(&mut self, dir: Direction) {
        self.prev = self.pos;
        self.pos += dir.delta();
    }

    /// Take back the last [`Marble::step`].
    #[inline]
    pub fn undo(&mut self) {
        self.pos = self.prev;
    }

    pub fn reset(&mut self) {
        self.pos = self.start;
        self.prev = self.start;
    }
}

/// Both marbles of a board, mutated in place during a sequence attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marbles {
    pub target: Marble,
    pub obstacle: Marble,
}

impl Marbles {
    pub fn new(target: Coord, obstacle: Coord) -> Self {
        Self {
            target: Marble::new(MarbleKind::Target, target),
            obstacle: Marble::new(MarbleKind::Obstacle, obstacle),
        }
    }

    /// `(target, obstacle)` positions.
    #[inline]
    pub fn positions(&self) -> (Coord, Coord) {
        (self.target.pos, self.obstacle.pos)
    }

    pub fn reset(&mut self) {
        self.target.reset();
        self.obstacle.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_restores_position_before_last_step() {
        let mut m = Marble::new(MarbleKind::Target, Coord::new(2, 2));
        m.step(Direction::Right);
        m.step(Direction::Right);
        assert_eq!(m.pos, Coord::new(4, 2));
        m.undo();
        assert_eq!(m.pos, Coord::new(3, 2));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut ms = Marbles::new(Coord::new(1, 1), Coord::new(3, 1));
        ms.target.step(Direction::Down);
        ms.obstacle.step(Direction::Left);
        ms.reset();
        let once = ms.clone();
        ms.reset();
        assert_eq!(ms, once);
        assert_eq!(ms.positions(), (Coord::new(1, 1), Coord::new(3, 1)));
    }
}
