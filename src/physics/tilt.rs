use serde::Serialize;

use crate::board::Grid;
use crate::core::coord::Coord;
use crate::core::direction::Direction;
use crate::marble::{Marble, Marbles};

use super::roll::{roll, RollStop};

/// What one tilt did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltOutcome {
    /// Neither marble moved.
    NoMovement,
    /// The obstacle dropped (with or without the target). Failure.
    ObstacleInHole,
    /// The target dropped and the obstacle did not. Success.
    TargetInHole,
    /// Both marbles still on the board.
    Continue,
}

impl TiltOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TiltOutcome::Continue)
    }
}

/// Is `target` further along `dir` than `obstacle`?
#[inline]
fn target_leads(dir: Direction, target: Coord, obstacle: Coord) -> bool {
    match dir {
        Direction::Right => target.x > obstacle.x,
        Direction::Left => target.x < obstacle.x,
        Direction::Down => target.y > obstacle.y,
        Direction::Up => target.y < obstacle.y,
    }
}

/// Tilt the board once: the leading marble rolls first, then the trailing one against the
/// leader's settled square.
pub fn apply_tilt(dir: Direction, marbles: &mut Marbles, grid: &Grid) -> TiltOutcome {
    let before = marbles.positions();

    let Marbles { target, obstacle } = &mut *marbles;
    let (leader, trailer): (&mut Marble, &mut Marble) = if target_leads(dir, before.0, before.1)
    {
        (target, obstacle)
    } else {
        (obstacle, target)
    };

    let blocker = match roll(leader, Some(trailer.pos), dir, grid) {
        RollStop::Fell => None,
        RollStop::Settled => Some(leader.pos),
    };
    roll(trailer, blocker, dir, grid);

    let after = marbles.positions();
    if after == before {
        return TiltOutcome::NoMovement;
    }

    let (t, o) = after;
    if grid.is_hole(o) {
        TiltOutcome::ObstacleInHole
    } else if grid.is_hole(t) {
        TiltOutcome::TargetInHole
    } else {
        TiltOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn tilt(text: &str, dir: Direction) -> (TiltOutcome, Coord, Coord) {
        let board = Board::parse(text).unwrap();
        let mut m = board.marbles();
        let out = apply_tilt(dir, &mut m, &board.grid);
        (out, m.target.pos, m.obstacle.pos)
    }

    #[test]
    fn leader_moves_first_in_every_direction() {
        // Same row: tilting right packs them against the east wall in order.
        let (out, t, o) = tilt("3 8\n########\n#R.B...#\n#..O...#\n########", Direction::Right);
        assert_eq!(out, TiltOutcome::Continue);
        assert_eq!((t, o), (Coord::new(5, 1), Coord::new(6, 1)));

        let (_, t, o) = tilt("3 8\n########\n#..B..R#\n#..O...#\n########", Direction::Left);
        assert_eq!((t, o), (Coord::new(2, 1), Coord::new(1, 1)));

        // Same column: the upper marble leads when tilting up.
        let board = "6 4\n####\n#..#\n#R.#\n#..#\n#BO#\n####";
        let (_, t, o) = tilt(board, Direction::Up);
        assert_eq!((t, o), (Coord::new(1, 1), Coord::new(1, 2)));
        let (_, t, o) = tilt(board, Direction::Down);
        assert_eq!((t, o), (Coord::new(1, 3), Coord::new(1, 4)));
    }

    #[test]
    fn both_blocked_is_no_movement() {
        let (out, t, o) = tilt("3 5\n#####\n#RB.#\n#..O#\n#####", Direction::Left);
        assert_eq!(out, TiltOutcome::NoMovement);
        assert_eq!((t, o), (Coord::new(1, 1), Coord::new(2, 1)));
    }

    #[test]
    fn target_alone_in_hole_is_success() {
        let (out, t, _) = tilt("3 7\n#######\n#R.O.B#\n#######", Direction::Right);
        assert_eq!(out, TiltOutcome::TargetInHole);
        assert_eq!(t, Coord::new(3, 1));
    }

    #[test]
    fn fallen_leader_does_not_shield_the_trailer() {
        let (out, t, o) = tilt("3 10\n##########\n#.O....RB#\n##########", Direction::Left);
        assert_eq!(out, TiltOutcome::ObstacleInHole);
        assert_eq!((t, o), (Coord::new(2, 1), Coord::new(2, 1)));
    }

    #[test]
    fn obstacle_in_hole_is_failure() {
        let (out, t, o) = tilt("3 7\n#######\n#B.O.R#\n#######", Direction::Right);
        assert_eq!(out, TiltOutcome::ObstacleInHole);
        assert_eq!(o, Coord::new(3, 1));
        assert_eq!(t, Coord::new(5, 1));
    }
}
