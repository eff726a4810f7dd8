use crate::core::coord::Coord;

/// Static cell kinds. Marbles are never part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Hole,
    Empty,
}

impl Cell {
    pub const WALL: char = '#';
    pub const HOLE: char = 'O';
    pub const EMPTY: char = '.';

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            Self::WALL => Some(Cell::Wall),
            Self::HOLE => Some(Cell::Hole),
            Self::EMPTY => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => Self::WALL,
            Cell::Hole => Self::HOLE,
            Cell::Empty => Self::EMPTY,
        }
    }
}

/// An immutable rectangular map of cells.
///
/// Cells are stored densely in row-major order so `Coord -> Cell` is O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i16,
    height: i16,
    hole: Coord,
}

impl Grid {
    /// Build from row-major cells. The caller (the board parser) has already checked
    /// that the grid is rectangular and has exactly one hole at `hole`.
    pub(crate) fn from_cells(cells: Vec<Cell>, width: i16, height: i16, hole: Coord) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        debug_assert_eq!(cells[(hole.y as usize) * (width as usize) + hole.x as usize], Cell::Hole);
        Self {
            cells,
            width,
            height,
            hole,
        }
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.height
    }

    #[inline]
    pub fn hole(&self) -> Coord {
        self.hole
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    /// The cell at `c`. Simulation on an enclosed grid never asks for an out-of-bounds cell.
    #[inline]
    pub fn cell_at(&self, c: Coord) -> Cell {
        debug_assert!(self.contains(c), "cell {c:?} outside {}x{}", self.width, self.height);
        self.cells[(c.y as usize) * (self.width as usize) + (c.x as usize)]
    }

    #[inline]
    pub fn is_hole(&self, c: Coord) -> bool {
        c == self.hole
    }
}
