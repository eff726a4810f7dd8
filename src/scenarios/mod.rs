//! Built-in reference boards with their known results.

/// A named board and the result the solver must report for it at the default depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub text: &'static str,
    pub expected: i32,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "corner_drop",
        text: "5 5\n#####\n#..B#\n#.#.#\n#RO.#\n#####",
        expected: 1,
    },
    Scenario {
        name: "side_by_side",
        text: "7 7\n#######\n#...RB#\n#.#####\n#.....#\n#####.#\n#O....#\n#######",
        expected: 5,
    },
    Scenario {
        name: "split_start",
        text: "7 7\n#######\n#..R#B#\n#.#####\n#.....#\n#####.#\n#O....#\n#######",
        expected: 5,
    },
    Scenario {
        name: "sealed_hole",
        text: "10 10\n##########\n#R#...##B#\n#...#.##.#\n#####.##.#\n#......#.#\n\
               #.######.#\n#.#....#.#\n#.#.#.#..#\n#...#.O#.#\n##########",
        expected: -1,
    },
    Scenario {
        name: "hole_between",
        text: "3 7\n#######\n#R.O.B#\n#######",
        expected: 1,
    },
    Scenario {
        name: "winding",
        text: "10 10\n##########\n#R#...##B#\n#...#.##.#\n#####.##.#\n#......#.#\n\
               #.######.#\n#.#....#.#\n#.#.##...#\n#O..#....#\n##########",
        expected: 7,
    },
    Scenario {
        name: "shared_corridor",
        text: "3 10\n##########\n#.O....RB#\n##########",
        expected: -1,
    },
];

pub fn all() -> &'static [Scenario] {
    SCENARIOS
}

/// Return a scenario by name.
pub fn by_name(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// Names of all built-in scenarios.
pub fn names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|s| s.name).collect()
}
