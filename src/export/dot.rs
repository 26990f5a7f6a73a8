use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::square::Square;
use crate::error::ExportError;
use crate::search::PathSet;

const GRAPH_NAME: &str = "shortest_paths";

/// Render a path set as a Graphviz `digraph`.
///
/// One `from -> to;` statement per move of every path, in path order. With
/// `allow_duplicates == false` a directed edge is emitted only the first time
/// it occurs.
pub fn render_dot(board: &Board, paths: &PathSet, allow_duplicates: bool) -> String {
    let mut out = format!("digraph {GRAPH_NAME} {{\n");
    let mut emitted: FxHashSet<(Square, Square)> = FxHashSet::default();

    for path in paths {
        for (from, to) in path.steps() {
            if !allow_duplicates && !emitted.insert((from, to)) {
                continue;
            }
            out.push('\t');
            out.push_str(&board.label(from));
            out.push_str(" -> ");
            out.push_str(&board.label(to));
            out.push_str(";\n");
        }
    }

    out.push_str("}\n");
    out
}

/// Write [`render_dot`] output to `file`.
pub fn write_dot(
    board: &Board,
    paths: &PathSet,
    allow_duplicates: bool,
    file: &Path,
) -> Result<(), ExportError> {
    let dot = render_dot(board, paths, allow_duplicates);

    let f = fs::File::create(file).map_err(|e| ExportError::Io {
        stage: "dot_export_create",
        path: file.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    w.write_all(dot.as_bytes()).map_err(|e| ExportError::Io {
        stage: "dot_export_write",
        path: file.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| ExportError::Io {
        stage: "dot_export_flush",
        path: file.display().to_string(),
        error: e.to_string(),
    })?;

    tracing::info!(path = %file.display(), bytes = dot.len(), "wrote dot file");
    Ok(())
}
