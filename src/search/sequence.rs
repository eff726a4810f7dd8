use tracing::{debug, trace};

use crate::board::Board;
use crate::core::direction::Direction;
use crate::error::Result;
use crate::marble::Marbles;
use crate::physics::{apply_tilt, TiltOutcome};

use super::paths::PathSet;
use super::resources::ResourceTracker;
use super::Outcome;

/// How one sequence attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// The target dropped alone after this many tilts.
    Solved(usize),
    /// The next tilt could not beat the best known solution.
    Pruned(usize),
    /// A tilt moved nothing; this state was already reached by a shorter prefix.
    Stuck(usize),
    /// The obstacle dropped.
    Lost(usize),
    /// Every tilt was applied without reaching a terminal state.
    Exhausted,
}

/// Walk one sequence from the start state, stopping at the first terminal event.
fn walk(
    seq: &[Direction],
    best: Option<usize>,
    marbles: &mut Marbles,
    board: &Board,
    tracker: &mut ResourceTracker,
) -> Result<Attempt> {
    let mut count = 0usize;
    for &dir in seq {
        if best.is_some_and(|b| count + 1 >= b) {
            return Ok(Attempt::Pruned(count));
        }

        tracker.bump_tilts(1)?;
        let outcome = apply_tilt(dir, marbles, &board.grid);
        count += 1;

        match outcome {
            TiltOutcome::NoMovement => return Ok(Attempt::Stuck(count)),
            TiltOutcome::TargetInHole => return Ok(Attempt::Solved(count)),
            TiltOutcome::ObstacleInHole => return Ok(Attempt::Lost(count)),
            TiltOutcome::Continue => {}
        }
    }
    Ok(Attempt::Exhausted)
}

/// Minimum number of tilts that drops the target without the obstacle, trying every
/// sequence in `paths` from the board's start state.
///
/// Marbles are reset before each attempt. Once a solution of length `n` is known, no attempt
/// applies an `n`-th tilt, so later solutions are always strictly shorter.
pub fn solve(board: &Board, paths: &PathSet, tracker: &mut ResourceTracker) -> Result<Outcome> {
    let mut marbles = board.marbles();
    let mut best: Option<&[Direction]> = None;

    for seq in paths.sequences() {
        tracker.bump_sequences(1)?;
        marbles.reset();

        match walk(seq, best.map(<[Direction]>::len), &mut marbles, board, tracker)? {
            Attempt::Solved(n) => {
                debug!(tilts = n, path = ?&seq[..n], "new minimum");
                best = Some(&seq[..n]);
            }
            Attempt::Pruned(at) => trace!(at, "pruned"),
            Attempt::Stuck(at) => trace!(at, "no movement"),
            Attempt::Lost(at) => trace!(at, "obstacle dropped"),
            Attempt::Exhausted => {}
        }
    }

    let counts = tracker.counts();
    debug!(
        sequences = counts.sequences,
        tilts = counts.tilts,
        best = ?best.map(<[Direction]>::len),
        "search finished"
    );

    Ok(match best {
        Some(path) => Outcome::Solved {
            tilts: path.len(),
            path: path.to_vec(),
        },
        None => Outcome::Unsolved,
    })
}
