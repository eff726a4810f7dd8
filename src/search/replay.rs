use serde::Serialize;

use crate::board::Board;
use crate::core::coord::Coord;
use crate::core::direction::Direction;
use crate::physics::{apply_tilt, TiltOutcome};

/// Board state right after one tilt of a replayed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TiltRecord {
    pub direction: Direction,
    pub outcome: TiltOutcome,
    pub target: Coord,
    pub obstacle: Coord,
}

/// Apply `seq` from the start state, recording every tilt. Stops after the first tilt that
/// ends the attempt (no movement or a marble in the hole).
pub fn replay(board: &Board, seq: &[Direction]) -> Vec<TiltRecord> {
    let mut marbles = board.marbles();
    let mut out = Vec::with_capacity(seq.len());
    for &direction in seq {
        let outcome = apply_tilt(direction, &mut marbles, &board.grid);
        let (target, obstacle) = marbles.positions();
        out.push(TiltRecord {
            direction,
            outcome,
            target,
            obstacle,
        });
        if outcome.is_terminal() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_the_first_terminal_tilt() {
        let board = Board::parse("3 7\n#######\n#R.O.B#\n#######").unwrap();
        let recs = replay(&board, &[Direction::Right, Direction::Up, Direction::Left]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].outcome, TiltOutcome::TargetInHole);
        assert_eq!(recs[0].target, board.grid.hole());
    }
}
