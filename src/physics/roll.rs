use crate::board::{Cell, Grid};
use crate::core::coord::Coord;
use crate::core::direction::Direction;
use crate::marble::Marble;

/// How a roll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollStop {
    /// Came to rest against a wall or the other marble (possibly without moving).
    Settled,
    /// Dropped into the hole; the marble's position is the hole cell.
    Fell,
}

/// Roll `marble` along `dir` one cell at a time until it is blocked or drops.
///
/// `blocker` is the other marble's *live* square, or `None` if that marble already fell
/// into the hole during this tilt (a fallen marble no longer occupies the board).
///
/// After each step, in order: entering `blocker` is undone and stops the roll; the hole stops
/// it on the hole cell; empty floor keeps rolling; a wall is undone and stops the roll.
pub fn roll(marble: &mut Marble, blocker: Option<Coord>, dir: Direction, grid: &Grid) -> RollStop {
    loop {
        marble.step(dir);

        if blocker == Some(marble.pos) {
            marble.undo();
            return RollStop::Settled;
        }

        match grid.cell_at(marble.pos) {
            Cell::Hole => return RollStop::Fell,
            Cell::Empty => continue,
            Cell::Wall => {
                marble.undo();
                return RollStop::Settled;
            }
        }
    }
}
