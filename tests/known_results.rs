use marble_escape::config::{ResourceLimits, SolverConfig};
use marble_escape::physics::TiltOutcome;
use marble_escape::scenarios;
use marble_escape::search::replay::replay;
use marble_escape::{run, Board, Error, Outcome, Solver};

#[test]
fn reference_boards_match_known_results() {
    for scn in scenarios::all() {
        let got = run(scn.text).unwrap();
        assert_eq!(got, scn.expected, "scenario {}", scn.name);
    }
}

#[test]
fn results_are_unsolved_or_within_depth() {
    for scn in scenarios::all() {
        let got = run(scn.text).unwrap();
        assert!(got == -1 || (1..=10).contains(&got), "{}: {got}", scn.name);
    }
}

#[test]
fn winning_path_replays_to_target_in_hole() {
    let solver = Solver::default();
    for scn in scenarios::all() {
        let board = Board::parse(scn.text).unwrap();
        let outcome = solver.solve(&board).unwrap();
        let Outcome::Solved { tilts, path } = &outcome else {
            assert_eq!(scn.expected, -1, "{}", scn.name);
            continue;
        };
        assert_eq!(*tilts, path.len());

        let steps = replay(&board, path);
        assert_eq!(steps.len(), *tilts, "{}", scn.name);
        assert_eq!(steps.last().map(|s| s.outcome), Some(TiltOutcome::TargetInHole));
        assert!(steps[..steps.len() - 1]
            .iter()
            .all(|s| s.outcome == TiltOutcome::Continue));
        for w in path.windows(2) {
            assert_ne!(w[0].axis(), w[1].axis());
        }
    }
}

#[test]
fn depth_bound_hides_longer_solutions() {
    let scn = scenarios::by_name("winding").unwrap();
    let board = Board::parse(scn.text).unwrap();

    for depth in 1..=12 {
        let solver = Solver::new(SolverConfig {
            max_depth: depth,
            ..SolverConfig::default()
        })
        .unwrap();
        let got = solver.solve(&board).unwrap().code();
        let want = if depth < 7 { -1 } else { 7 };
        assert_eq!(got, want, "depth {depth}");
    }
}

#[test]
fn solving_twice_gives_the_same_outcome() {
    let solver = Solver::default();
    let scn = scenarios::by_name("split_start").unwrap();
    let a = solver.solve_text(scn.text).unwrap();
    let b = solver.solve_text(scn.text).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.tilts(), Some(5));
}

#[test]
fn tight_budget_is_reported_not_truncated() {
    let solver = Solver::new(SolverConfig {
        max_depth: 10,
        limits: ResourceLimits {
            max_tilts: 50,
            max_sequences: 1_000_000,
        },
    })
    .unwrap();
    let scn = scenarios::by_name("sealed_hole").unwrap();
    let err = solver.solve_text(scn.text).unwrap_err();
    assert!(matches!(err, Error::LimitExceeded { metric: "tilts", .. }));
}

#[test]
fn unsolved_code_is_minus_one() {
    assert_eq!(Outcome::Unsolved.code(), -1);
    assert!(Outcome::Unsolved.path().is_empty());
}
