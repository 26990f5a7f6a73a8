use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::coord::{Coord, KNIGHT_STEPS};
use crate::core::square::Square;
use crate::error::SquareError;

#[derive(Clone, Debug, Default)]
struct Node {
    /// Neighbours in ascending id order.
    adj: Vec<Square>,
}

/// The knight-move graph of a board.
///
/// Undirected, unweighted and simple. It has no mutating methods: build it once
/// with [`build_board_graph`] or [`GraphBuilder`] and share it by reference.
#[derive(Clone, Debug)]
pub struct KnightGraph {
    board: Board,
    nodes: Vec<Node>,
}

impl KnightGraph {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> {
        self.board.squares()
    }

    /// Neighbours of `sq` in ascending id order. Empty for a square that is
    /// not on this graph's board.
    pub fn neighbors(&self, sq: Square) -> &[Square] {
        self.nodes
            .get(sq.index())
            .map(|n| n.adj.as_slice())
            .unwrap_or(&[])
    }

    pub fn degree(&self, sq: Square) -> usize {
        self.neighbors(sq).len()
    }

    /// Reject a square that does not belong to this graph's board.
    pub fn check_square(&self, sq: Square) -> Result<(), SquareError> {
        if self.board.contains(sq) {
            Ok(())
        } else {
            Err(SquareError::InvalidSquare {
                id: sq.id() as i64,
                max: self.board.square_count() as u16,
            })
        }
    }

    pub fn has_edge(&self, a: Square, b: Square) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.adj.len()).sum::<usize>() / 2
    }

    /// Every undirected edge once, as `(a, b)` with `a < b`, in id order.
    pub fn edges(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares().flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }
}

/// Builds a [`KnightGraph`], optionally with some edges pruned.
pub struct GraphBuilder {
    pub board: Board,
    removed: FxHashSet<(Square, Square)>,
}

impl GraphBuilder {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            removed: FxHashSet::default(),
        }
    }

    /// Leave the undirected edge `a`–`b` out of the built graph.
    ///
    /// Pruning an edge that is not a knight move is a no-op.
    pub fn without_edge(mut self, a: Square, b: Square) -> Self {
        self.removed.insert(ordered(a, b));
        self
    }

    /// Leave every edge touching `sq` out of the built graph.
    ///
    /// A square that is not on the board has no edges; this is then a no-op.
    pub fn isolate(mut self, sq: Square) -> Self {
        if !self.board.contains(sq) {
            return self;
        }
        let c = self.board.coord_of(sq);
        for step in KNIGHT_STEPS {
            if let Some(nb) = self.board.sq_of(c + step) {
                self.removed.insert(ordered(sq, nb));
            }
        }
        self
    }

    /// Visit every coordinate of the board and link it to each on-board knight
    /// step. Each edge is seen once from either end; lists are deduplicated.
    pub fn build(&self) -> KnightGraph {
        let board = self.board;
        let n = board.size() as i32;
        let mut nodes: Vec<Node> = vec![Node::default(); board.square_count()];

        for row in 0..n {
            for col in 0..n {
                let c = Coord::new(row, col);
                let Some(sq) = board.sq_of(c) else {
                    continue;
                };
                for step in KNIGHT_STEPS {
                    let Some(nb) = board.sq_of(c + step) else {
                        continue;
                    };
                    if self.removed.contains(&ordered(sq, nb)) {
                        continue;
                    }
                    nodes[sq.index()].adj.push(nb);
                    nodes[nb.index()].adj.push(sq);
                }
            }
        }

        // Determinise the adjacency lists.
        for node in &mut nodes {
            node.adj.sort_unstable();
            node.adj.dedup();
        }

        let graph = KnightGraph { board, nodes };
        tracing::debug!(
            size = board.size(),
            squares = graph.len(),
            edges = graph.edge_count(),
            "built knight graph"
        );
        graph
    }
}

/// Build the knight graph of an `n`×`n` board.
pub fn build_board_graph(n: usize) -> Result<KnightGraph, SquareError> {
    Ok(GraphBuilder::new(Board::new(n)?).build())
}

fn ordered(a: Square, b: Square) -> (Square, Square) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
