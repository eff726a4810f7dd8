//! Small value types shared by every layer:
//!
//! - [`coord`]: `(column, row)` cell addresses.
//! - [`direction`]: the four tilt directions and their axes.

pub mod coord;
pub mod direction;
