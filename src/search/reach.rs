//! Breadth-first solver over board states.
//!
//! Independent of [`super::sequence`]: instead of replaying fixed sequences from the start it
//! expands each distinct `(target, obstacle, last axis)` state once, level by level. Both
//! solvers apply the same alternation rule, so for any depth bound they agree on the minimum.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::core::coord::Coord;
use crate::core::direction::{Axis, Direction};
use crate::error::Result;
use crate::marble::Marbles;
use crate::physics::{apply_tilt, TiltOutcome};

use super::resources::ResourceTracker;
use super::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Node {
    target: Coord,
    obstacle: Coord,
    last: Option<Axis>,
}

pub fn shortest_by_bfs(
    board: &Board,
    max_depth: usize,
    tracker: &mut ResourceTracker,
) -> Result<Outcome> {
    let start = Node {
        target: board.target_start,
        obstacle: board.obstacle_start,
        last: None,
    };

    let mut seen: FxHashSet<Node> = FxHashSet::default();
    let mut parent: FxHashMap<Node, (Node, Direction)> = FxHashMap::default();
    seen.insert(start);
    let mut frontier = vec![start];

    for depth in 1..=max_depth {
        let mut next = Vec::new();
        for &node in &frontier {
            tracker.bump_sequences(1)?;
            for dir in Direction::ALL {
                if node.last == Some(dir.axis()) {
                    continue;
                }

                tracker.bump_tilts(1)?;
                let mut marbles = Marbles::new(node.target, node.obstacle);
                let outcome = apply_tilt(dir, &mut marbles, &board.grid);
                match outcome {
                    TiltOutcome::NoMovement | TiltOutcome::ObstacleInHole => continue,
                    TiltOutcome::TargetInHole => {
                        let mut path = vec![dir];
                        path.extend(trace_back(&parent, node));
                        path.reverse();
                        debug_assert_eq!(path.len(), depth);
                        return Ok(Outcome::Solved { tilts: depth, path });
                    }
                    TiltOutcome::Continue => {}
                }

                let (target, obstacle) = marbles.positions();
                let child = Node {
                    target,
                    obstacle,
                    last: Some(dir.axis()),
                };
                if seen.insert(child) {
                    parent.insert(child, (node, dir));
                    next.push(child);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    Ok(Outcome::Unsolved)
}

/// Directions leading to `node`, last first.
fn trace_back(parent: &FxHashMap<Node, (Node, Direction)>, mut node: Node) -> Vec<Direction> {
    let mut out = Vec::new();
    while let Some(&(prev, dir)) = parent.get(&node) {
        out.push(dir);
        node = prev;
    }
    out
}
