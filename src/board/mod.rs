//! Board loading: the textual board format, the static [`Grid`], and marble start squares.
//!
//! The text format is a header line (human-readable dimensions, ignored) followed by equally
//! long grid rows over `#` (wall), `O` (hole), `R` (target start), `B` (obstacle start) and
//! `.` (empty). Marble cells become [`Cell::Empty`] once their positions are recorded.

pub mod grid;
pub mod render;

pub use grid::{Cell, Grid};

use crate::core::coord::Coord;
use crate::error::{Error, Result};
use crate::marble::{MarbleKind, Marbles};

/// A parsed puzzle: immutable grid plus both marble start squares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid: Grid,
    pub target_start: Coord,
    pub obstacle_start: Coord,
}

impl Board {
    pub fn parse(text: &str) -> Result<Board> {
        let mut lines = text.lines();
        // Header line: required, never interpreted.
        lines.next().ok_or(Error::EmptyBoard)?;

        let mut rows: Vec<&str> = lines.collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(Error::EmptyBoard);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        if width == 0 {
            return Err(Error::EmptyBoard);
        }
        if width > i16::MAX as usize || height > i16::MAX as usize {
            return Err(Error::BoardTooLarge { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut target = None;
        let mut obstacle = None;
        let mut holes = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                let here = Coord::new(x as i16, y as i16);
                let cell = match ch {
                    'R' => {
                        place(&mut target, MarbleKind::Target, here)?;
                        Cell::Empty
                    }
                    'B' => {
                        place(&mut obstacle, MarbleKind::Obstacle, here)?;
                        Cell::Empty
                    }
                    _ => Cell::from_char(ch).ok_or(Error::UnknownCell {
                        character: ch,
                        col: x,
                        row: y,
                    })?,
                };

                let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                if on_border && cell != Cell::Wall {
                    return Err(Error::OpenBorder { col: x, row: y });
                }
                if cell == Cell::Hole {
                    holes.push(here);
                }
                cells.push(cell);
            }
        }

        let target_start = target.ok_or(Error::MissingMarble {
            marble: MarbleKind::Target,
        })?;
        let obstacle_start = obstacle.ok_or(Error::MissingMarble {
            marble: MarbleKind::Obstacle,
        })?;
        let hole = match holes.as_slice() {
            [] => return Err(Error::MissingHole),
            [only] => *only,
            many => return Err(Error::MultipleHoles { count: many.len() }),
        };

        Ok(Board {
            grid: Grid::from_cells(cells, width as i16, height as i16, hole),
            target_start,
            obstacle_start,
        })
    }

    /// Fresh marbles at their start squares.
    pub fn marbles(&self) -> Marbles {
        Marbles::new(self.target_start, self.obstacle_start)
    }
}

fn place(slot: &mut Option<Coord>, marble: MarbleKind, at: Coord) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateMarble { marble });
    }
    *slot = Some(at);
    Ok(())
}
