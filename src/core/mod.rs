//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: signed `(row, col)` coordinates and the knight step set.
//! - [`square`]: the 1-based square id newtype.

pub mod coord;
pub mod square;
