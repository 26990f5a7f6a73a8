//! Output artifacts for a query: Graphviz text, PNG images and a JSON summary
//! for stdout.

pub mod dot;
pub mod raster;

use serde::Serialize;

use crate::board::Board;
use crate::search::PathSet;

/// Serializable view of a [`PathSet`] with squares written as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    pub from: String,
    pub to: String,
    pub moves: u32,
    pub count: usize,
    pub paths: Vec<Vec<String>>,
}

impl PathSummary {
    pub fn new(board: &Board, paths: &PathSet) -> Self {
        Self {
            from: board.label(paths.source()),
            to: board.label(paths.target()),
            moves: paths.moves(),
            count: paths.len(),
            paths: paths
                .iter()
                .map(|p| p.squares().iter().map(|&sq| board.label(sq)).collect())
                .collect(),
        }
    }
}
