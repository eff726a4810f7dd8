use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A cell address on the board: `x` is the column, `y` the row (row 0 is the first grid line).
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let mut c = Coord::new(3, 4);
        c += Coord::new(-1, 0);
        assert_eq!(c, Coord::new(2, 4));
        assert_eq!(c - Coord::new(2, 2), Coord::new(0, 2));
        assert_eq!(Coord::new(1, 1) + Coord::new(-3, 0), Coord::new(-2, 1));
    }
}
