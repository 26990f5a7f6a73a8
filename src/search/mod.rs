//! Shortest-path search on the knight graph.
//!
//! - [`layers`]: layered breadth-first traversal with full predecessor sets.
//! - [`paths`]: enumeration of every minimum-length path from those sets.

pub mod layers;
pub mod paths;

pub use layers::distances_from;
pub use paths::{shortest_paths, Path, PathSet};
