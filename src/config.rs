//! Run configuration, loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{Board, STANDARD_SIZE};
use crate::error::ConfigError;
use crate::export::raster::{RenderOptions, MAX_CELL_SIZE, MIN_CELL_SIZE};

fn default_board_size() -> usize {
    STANDARD_SIZE
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_graph_image() -> Option<PathBuf> {
    Some(PathBuf::from("knight_graph.png"))
}

fn default_board_image() -> Option<PathBuf> {
    Some(PathBuf::from("shortest_paths_chessboard.png"))
}

fn default_dot_file() -> PathBuf {
    PathBuf::from("shortest_paths.dot")
}

fn default_cell_size() -> u32 {
    64
}

/// Everything the `knight_paths` binary needs besides the query itself.
///
/// Relative artifact paths are resolved against `out_dir`. A `null` image path
/// disables that image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default = "default_graph_image")]
    pub graph_image: Option<PathBuf>,
    #[serde(default = "default_board_image")]
    pub board_image: Option<PathBuf>,
    #[serde(default = "default_dot_file")]
    pub dot_file: PathBuf,
    /// `None` means ask interactively.
    #[serde(default)]
    pub allow_duplicate_edges: Option<bool>,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            out_dir: default_out_dir(),
            graph_image: default_graph_image(),
            board_image: default_board_image(),
            dot_file: default_dot_file(),
            allow_duplicate_edges: None,
            cell_size: default_cell_size(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let cfg: RunConfig = serde_json::from_str(text).map_err(|e| ConfigError::Json {
            path: origin.to_string(),
            error: e.to_string(),
        })?;
        cfg.board()?;
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cfg.cell_size) {
            return Err(ConfigError::CellSize {
                cell_size: cfg.cell_size,
                min: MIN_CELL_SIZE,
                max: MAX_CELL_SIZE,
            });
        }
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.board_size)?)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            cell_size: self.cell_size,
        }
    }

    pub fn dot_path(&self) -> PathBuf {
        self.out_dir.join(&self.dot_file)
    }

    pub fn graph_image_path(&self) -> Option<PathBuf> {
        self.graph_image.as_ref().map(|p| self.out_dir.join(p))
    }

    pub fn board_image_path(&self) -> Option<PathBuf> {
        self.board_image.as_ref().map(|p| self.out_dir.join(p))
    }

    /// Drop both image outputs.
    pub fn without_images(mut self) -> Self {
        self.graph_image = None;
        self.board_image = None;
        self
    }
}
