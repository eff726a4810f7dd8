//! Tilt-sequence search.
//!
//! - [`paths`]: the alternating-axis sequence set, enumerated once per depth.
//! - [`sequence`]: the enumerating minimum search over that set.
//! - [`reach`]: a breadth-first solver over board states, used as a cross-check.
//! - [`replay`]: step-by-step replay of one sequence.
//! - [`resources`]: work budgets.

pub mod paths;
pub mod reach;
pub mod replay;
pub mod resources;
pub mod sequence;

use serde::Serialize;

use crate::board::Board;
use crate::config::SolverConfig;
use crate::core::direction::Direction;
use crate::error::Result;

pub use paths::PathSet;
pub use resources::{ResourceCounts, ResourceTracker};

/// Result of a search. Running out of depth is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Solved { tilts: usize, path: Vec<Direction> },
    Unsolved,
}

impl Outcome {
    /// Sentinel reported for boards with no solution inside the depth bound.
    pub const UNSOLVED_CODE: i32 = -1;

    /// Minimum tilt count, or `-1` when unsolved.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Solved { tilts, .. } => *tilts as i32,
            Outcome::Unsolved => Self::UNSOLVED_CODE,
        }
    }

    pub fn tilts(&self) -> Option<usize> {
        match self {
            Outcome::Solved { tilts, .. } => Some(*tilts),
            Outcome::Unsolved => None,
        }
    }

    pub fn path(&self) -> &[Direction] {
        match self {
            Outcome::Solved { path, .. } => path,
            Outcome::Unsolved => &[],
        }
    }
}

/// A validated config plus the path set it implies, reusable across boards.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    paths: PathSet,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            paths: PathSet::enumerate(config.max_depth),
            config,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn solve(&self, board: &Board) -> Result<Outcome> {
        let mut tracker = ResourceTracker::new(self.config.limits);
        sequence::solve(board, &self.paths, &mut tracker)
    }

    pub fn solve_text(&self, text: &str) -> Result<Outcome> {
        self.solve(&Board::parse(text)?)
    }
}

impl Default for Solver {
    fn default() -> Self {
        let config = SolverConfig::default();
        Self {
            paths: PathSet::enumerate(config.max_depth),
            config,
        }
    }
}
