use rustc_hash::FxHashSet;

use crate::core::square::Square;
use crate::error::PathError;
use crate::graph::KnightGraph;
use crate::search::layers::{layered_bfs, Layers};

/// A sequence of squares where consecutive squares are a knight move apart.
///
/// Only built by [`shortest_paths`], so it always holds at least one square.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Square>);

impl Path {
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    /// Number of moves (edges), one less than the number of squares.
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Square {
        self.0[0]
    }

    pub fn last(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn reversed(&self) -> Path {
        let mut squares = self.0.clone();
        squares.reverse();
        Path(squares)
    }

    /// True if every step is an edge of `graph`.
    pub fn is_walk_in(&self, graph: &KnightGraph) -> bool {
        self.steps().all(|(a, b)| graph.has_edge(a, b))
    }
}

/// All minimum-length paths between two squares.
///
/// Paths are sorted lexicographically by square id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    source: Square,
    target: Square,
    moves: u32,
    paths: Vec<Path>,
}

impl PathSet {
    pub fn source(&self) -> Square {
        self.source
    }

    pub fn target(&self) -> Square {
        self.target
    }

    /// Length shared by every path, i.e. the knight distance.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// Distinct squares lying on at least one path, in id order.
    pub fn squares_visited(&self) -> Vec<Square> {
        let seen: FxHashSet<Square> = self
            .paths
            .iter()
            .flat_map(|p| p.squares().iter().copied())
            .collect();
        let mut out: Vec<Square> = seen.into_iter().collect();
        out.sort_unstable();
        out
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Every path of minimum length from `source` to `target`.
///
/// `source == target` yields the single zero-move path. Fails with
/// [`PathError::NoPath`] if `target` is unreachable and with
/// [`PathError::InvalidSquare`] if either square is off the board.
///
/// The number of shortest paths can grow exponentially with distance on large
/// graphs; on an 8×8 board the worst case is 108 paths (corner to corner).
pub fn shortest_paths(
    graph: &KnightGraph,
    source: Square,
    target: Square,
) -> Result<PathSet, PathError> {
    graph.check_square(source)?;
    graph.check_square(target)?;

    let layers = layered_bfs(graph, source, Some(target));
    let Some(moves) = layers.distance(target) else {
        tracing::debug!(%source, %target, visited = layers.visited(), "target unreachable");
        return Err(PathError::NoPath {
            from: source,
            to: target,
        });
    };

    let mut paths: Vec<Path> = Vec::new();
    let mut partial: Vec<Square> = Vec::with_capacity(moves as usize + 1);
    collect_back(&layers, target, &mut partial, &mut paths);
    paths.sort_unstable();

    debug_assert!(paths.iter().all(|p| p.moves() == moves as usize));

    tracing::debug!(
        %source,
        %target,
        moves,
        layers = layers.depth(),
        visited = layers.visited(),
        paths = paths.len(),
        "enumerated shortest paths"
    );

    Ok(PathSet {
        source,
        target,
        moves,
        paths,
    })
}

/// Walk predecessor sets from `sq` back to the source, branching at every
/// square with more than one predecessor. `partial` holds the walk in reverse.
fn collect_back(layers: &Layers, sq: Square, partial: &mut Vec<Square>, out: &mut Vec<Path>) {
    partial.push(sq);
    if sq == layers.source() {
        let mut squares = partial.clone();
        squares.reverse();
        out.push(Path(squares));
    } else {
        for &p in layers.predecessors(sq) {
            collect_back(layers, p, partial, out);
        }
    }
    partial.pop();
}
