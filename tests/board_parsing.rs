use marble_escape::board::Cell;
use marble_escape::core::coord::Coord;
use marble_escape::marble::MarbleKind;
use marble_escape::{run, Board, Error};

#[test]
fn header_line_is_ignored() {
    let a = Board::parse("5 5\n#####\n#..B#\n#.#.#\n#RO.#\n#####").unwrap();
    let b = Board::parse("anything at all\n#####\n#..B#\n#.#.#\n#RO.#\n#####").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.grid.cell_at(Coord::new(2, 2)), Cell::Wall);
    assert_eq!(a.grid.hole(), Coord::new(2, 3));
}

#[test]
fn missing_marbles_are_rejected() {
    let err = Board::parse("3 5\n#####\n#.BO#\n#####").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingMarble {
            marble: MarbleKind::Target
        }
    ));

    let err = run("3 5\n#####\n#R.O#\n#####").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingMarble {
            marble: MarbleKind::Obstacle
        }
    ));
}

#[test]
fn duplicate_marbles_are_rejected() {
    let err = Board::parse("3 6\n######\n#RBRO#\n######").unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateMarble {
            marble: MarbleKind::Target
        }
    ));
}

#[test]
fn hole_count_must_be_one() {
    assert!(matches!(
        Board::parse("3 5\n#####\n#RB.#\n#####"),
        Err(Error::MissingHole)
    ));
    assert!(matches!(
        Board::parse("3 6\n######\n#ORBO#\n######"),
        Err(Error::MultipleHoles { count: 2 })
    ));
}

#[test]
fn unknown_characters_are_rejected_with_location() {
    let err = Board::parse("3 5\n#####\n#RBx#\n#####").unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownCell {
            character: 'x',
            col: 3,
            row: 1
        }
    ));
}

#[test]
fn ragged_rows_are_rejected() {
    let err = Board::parse("3 5\n#####\n#RBO.#\n#####").unwrap_err();
    assert!(matches!(
        err,
        Error::RaggedRow {
            row: 1,
            expected: 5,
            found: 6
        }
    ));
}

#[test]
fn open_border_is_rejected() {
    let err = Board::parse("3 5\n#####\n.RBO#\n#####").unwrap_err();
    assert!(matches!(err, Error::OpenBorder { col: 0, row: 1 }));
}

#[test]
fn errors_render_readably() {
    let err = Board::parse("3 5\n#####\n#.BO#\n#####").unwrap_err();
    assert_eq!(err.to_string(), "board has no target (R) marble");
}
