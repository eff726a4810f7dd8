use std::fmt;

use crate::core::coord::Coord;

use super::Board;

impl Board {
    /// Grid text with both marbles drawn at the given squares, one line per row.
    ///
    /// A marble sitting on the hole is drawn in lowercase (`r` / `b`).
    pub fn render(&self, target: Coord, obstacle: Coord) -> String {
        let grid = &self.grid;
        let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let c = Coord::new(x, y);
                let marble = if c == target {
                    Some('R')
                } else if c == obstacle {
                    Some('B')
                } else {
                    None
                };
                let ch = match marble {
                    Some(m) if grid.is_hole(c) => m.to_ascii_lowercase(),
                    Some(m) => m,
                    None => grid.cell_at(c).symbol(),
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.target_start, self.obstacle_start))
    }
}
