//! Marble physics: single-marble rolls and whole-board tilts.

pub mod roll;
pub mod tilt;

pub use roll::{roll, RollStop};
pub use tilt::{apply_tilt, TiltOutcome};
