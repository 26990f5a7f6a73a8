//! Error types shared by the board, search, export and config layers.

use thiserror::Error;

use crate::core::square::Square;

/// A square id, label or board size outside the supported range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("invalid square {id}: expected an id in 1..={max}")]
    InvalidSquare { id: i64, max: u16 },

    #[error("invalid square label {label:?}")]
    InvalidLabel { label: String },

    #[error("invalid board size {size}: expected 1..=26")]
    InvalidBoardSize { size: usize },
}

/// Failure of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// `to` is not reachable from `from`.
    #[error("no path from square {from} to square {to}")]
    NoPath { from: Square, to: Square },

    #[error(transparent)]
    InvalidSquare(#[from] SquareError),
}

/// Failure while writing an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },

    #[error("failed to encode image {path}: {error}")]
    Image { path: String, error: String },
}

/// Failure while loading a [`crate::config::RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {error}")]
    Io { path: String, error: String },

    #[error("invalid JSON in config {path}: {error}")]
    Json { path: String, error: String },

    #[error("invalid config: {0}")]
    Invalid(#[from] SquareError),

    #[error("cell_size {cell_size} is outside {min}..={max}")]
    CellSize { cell_size: u32, min: u32, max: u32 },
}
