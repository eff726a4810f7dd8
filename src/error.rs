//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::marble::MarbleKind;

/// Structured errors returned while loading boards/configs or running a search.
///
/// An unsolvable board is *not* an error; see [`crate::search::Outcome::Unsolved`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board text is empty (expected a header line followed by grid rows)")]
    EmptyBoard,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized cell character {character:?} at column {col}, row {row}")]
    UnknownCell { character: char, col: usize, row: usize },

    #[error("board has no {marble} marble")]
    MissingMarble { marble: MarbleKind },

    #[error("board has more than one {marble} marble")]
    DuplicateMarble { marble: MarbleKind },

    #[error("board has no hole")]
    MissingHole,

    #[error("board has {count} holes, expected exactly one")]
    MultipleHoles { count: usize },

    #[error("border cell at column {col}, row {row} is not a wall")]
    OpenBorder { col: usize, row: usize },

    #[error("board is too large: {width}x{height}")]
    BoardTooLarge { width: usize, height: usize },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("limit exceeded: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        metric: &'static str,
        limit: u64,
        observed: u64,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
