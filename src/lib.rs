//! Minimum-tilt solver for a two-marble maze.
//!
//! A rectangular board holds walls, one hole, a target marble and an obstacle marble. Tilting the
//! board rolls both marbles until each hits a wall, the other marble, or drops into the hole.
//! The solver finds the fewest tilts (up to a depth bound, 10 by default) that drop the target
//! while the obstacle stays on the board.
//!
//! ```
//! let tilts = marble_escape::run("3 7\n#######\n#R.O.B#\n#######").unwrap();
//! assert_eq!(tilts, 1);
//! ```

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod marble;
pub mod physics;
pub mod scenarios;
pub mod search;

pub use board::Board;
pub use config::SolverConfig;
pub use error::{Error, Result};
pub use search::{Outcome, Solver};

/// Solve a board given as text with the default configuration.
///
/// Returns the minimum number of tilts, or `-1` if no sequence of at most 10 tilts works.
/// Malformed boards are errors.
pub fn run(board_text: &str) -> Result<i32> {
    let board = Board::parse(board_text)?;
    Ok(Solver::default().solve(&board)?.code())
}
