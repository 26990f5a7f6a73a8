use crate::core::square::Square;
use crate::error::SquareError;
use crate::graph::KnightGraph;

/// Result of a layered breadth-first traversal.
///
/// For every visited square we keep its distance from the source and the full
/// predecessor set: every neighbour exactly one layer closer to the source.
#[derive(Clone, Debug)]
pub struct Layers {
    source: Square,
    dist: Vec<Option<u32>>,
    preds: Vec<Vec<Square>>,
    depth: u32,
}

impl Layers {
    pub fn source(&self) -> Square {
        self.source
    }

    pub fn distance(&self, sq: Square) -> Option<u32> {
        self.dist.get(sq.index()).copied().flatten()
    }

    /// Predecessors of `sq` in ascending id order. Empty for the source and for
    /// squares that were not visited.
    pub fn predecessors(&self, sq: Square) -> &[Square] {
        self.preds.get(sq.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Index of the last layer that was expanded.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn visited(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    pub fn into_distances(self) -> Vec<Option<u32>> {
        self.dist
    }
}

/// Breadth-first traversal from `source`, one whole layer at a time.
///
/// A square first reached from layer `d` gets distance `d + 1` only after every
/// square of layer `d` has been expanded, so all of its shortest-path
/// predecessors are collected. With `stop_at` the traversal ends once the layer
/// containing that square is complete.
///
/// `source` and `stop_at` must belong to the graph's board.
pub fn layered_bfs(graph: &KnightGraph, source: Square, stop_at: Option<Square>) -> Layers {
    let n = graph.len();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut preds: Vec<Vec<Square>> = vec![Vec::new(); n];

    dist[source.index()] = Some(0);
    let mut frontier: Vec<Square> = vec![source];
    let mut depth: u32 = 0;

    while !frontier.is_empty() {
        if let Some(t) = stop_at {
            if dist[t.index()].is_some() {
                break;
            }
        }

        let next_d = depth + 1;
        let mut next: Vec<Square> = Vec::new();

        for &u in &frontier {
            for &v in graph.neighbors(u) {
                match dist[v.index()] {
                    None => {
                        dist[v.index()] = Some(next_d);
                        preds[v.index()].push(u);
                        next.push(v);
                    }
                    Some(dv) if dv == next_d => preds[v.index()].push(u),
                    Some(dv) => {
                        debug_assert!(dv <= depth, "square {v} has distance {dv} beyond layer {next_d}");
                    }
                }
            }
        }

        if next.is_empty() {
            break;
        }
        for &v in &next {
            preds[v.index()].sort_unstable();
        }
        frontier = next;
        depth = next_d;
    }

    Layers {
        source,
        dist,
        preds,
        depth,
    }
}

/// Distance (in knight moves) from `source` to every square, indexed by
/// `Square::index`. `None` marks unreachable squares.
pub fn distances_from(
    graph: &KnightGraph,
    source: Square,
) -> Result<Vec<Option<u32>>, SquareError> {
    graph.check_square(source)?;
    Ok(layered_bfs(graph, source, None).into_distances())
}
