//! Enumeration of candidate tilt sequences.
//!
//! Tilting twice in a row along the same axis never helps (the second tilt alone gives the same
//! board), so every sequence alternates horizontal and vertical. With four first moves and two
//! choices afterwards there are `4 * 2^(depth-1)` sequences of full length.

use crate::core::direction::Direction;

/// All alternating-axis sequences of one fixed length, computed once and shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    depth: usize,
    // Row-major: sequence `i` is `dirs[i * depth..(i + 1) * depth]`.
    dirs: Vec<Direction>,
}

impl PathSet {
    /// Build every sequence of length `depth` (`depth >= 1`).
    pub fn enumerate(depth: usize) -> Self {
        assert!(depth >= 1, "path depth must be at least 1");

        let mut paths: Vec<Vec<Direction>> = Direction::ALL.iter().map(|&d| vec![d]).collect();
        for _ in 1..depth {
            paths = extend(paths);
        }

        let dirs = paths.into_iter().flatten().collect();
        Self { depth, dirs }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.dirs.len() / self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn sequences(&self) -> impl ExactSizeIterator<Item = &[Direction]> + '_ {
        self.dirs.chunks_exact(self.depth)
    }
}

/// Append each direction of the other axis to every path.
fn extend(paths: Vec<Vec<Direction>>) -> Vec<Vec<Direction>> {
    let mut out = Vec::with_capacity(paths.len() * 2);
    for path in paths {
        let last = path[path.len() - 1];
        for next in last.axis().other().directions() {
            let mut p = path.clone();
            p.push(next);
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_one_is_the_four_directions() {
        let ps = PathSet::enumerate(1);
        let got: Vec<&[Direction]> = ps.sequences().collect();
        assert_eq!(got.len(), 4);
        for (seq, d) in got.iter().zip(Direction::ALL) {
            assert_eq!(*seq, &[d]);
        }
    }

    #[test]
    fn depth_three_doubles_twice() {
        let ps = PathSet::enumerate(3);
        assert_eq!(ps.len(), 16);
        assert_eq!(ps.sequences().len(), 16);
        assert_eq!(
            ps.sequences().next().unwrap(),
            &[Direction::Left, Direction::Up, Direction::Left]
        );
    }
}
