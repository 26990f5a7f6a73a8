use knight_paths::board::Board;
use knight_paths::error::SquareError;
use knight_paths::graph::{build_board_graph, GraphBuilder};

fn sq(board: &Board, label: &str) -> knight_paths::core::square::Square {
    board.parse_label(label).unwrap()
}

#[test]
fn standard_board_has_168_knight_edges() {
    let g = build_board_graph(8).unwrap();
    assert_eq!(g.len(), 64);
    assert_eq!(g.edge_count(), 168);
    assert_eq!(g.edges().count(), 168);
}

#[test]
fn degrees_follow_board_geometry() {
    let g = build_board_graph(8).unwrap();
    let b = *g.board();
    for corner in ["a1", "a8", "h1", "h8"] {
        assert_eq!(g.degree(sq(&b, corner)), 2, "{corner}");
    }
    assert_eq!(g.degree(sq(&b, "b1")), 3);
    assert_eq!(g.degree(sq(&b, "b2")), 4);
    assert_eq!(g.degree(sq(&b, "d4")), 8);
    assert_eq!(g.degree(sq(&b, "e5")), 8);

    let degree_sum: usize = g.squares().map(|s| g.degree(s)).sum();
    assert_eq!(degree_sum, 2 * g.edge_count());
}

#[test]
fn graph_is_simple_and_symmetric() {
    let g = build_board_graph(8).unwrap();
    let b = *g.board();
    for u in g.squares() {
        let nbs = g.neighbors(u);
        assert!(!nbs.contains(&u), "self-loop at {u}");
        assert!(nbs.windows(2).all(|w| w[0] < w[1]), "unsorted or duplicated at {u}");
        for &v in nbs {
            assert!(g.has_edge(v, u), "{u}->{v} without {v}->{u}");
            let delta = b.coord_of(v) - b.coord_of(u);
            assert!(delta.is_knight_step(), "{u}->{v} is not a knight move");
        }
    }
}

#[test]
fn every_knight_displacement_is_an_edge() {
    let g = build_board_graph(8).unwrap();
    let b = *g.board();
    for u in b.squares() {
        for v in b.squares() {
            let is_step = (b.coord_of(v) - b.coord_of(u)).is_knight_step();
            assert_eq!(g.has_edge(u, v), is_step, "{u} {v}");
        }
    }
}

#[test]
fn column_major_ids_match_labels() {
    let g = build_board_graph(8).unwrap();
    let b = *g.board();
    // a1 = 1 reaches b3 (id 11) and c2 (id 18).
    let a1 = b.square(1).unwrap();
    let ids: Vec<u16> = g.neighbors(a1).iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![11, 18]);
    assert_eq!(b.label(b.square(11).unwrap()), "b3");
    assert_eq!(b.label(b.square(18).unwrap()), "c2");
}

#[test]
fn tiny_boards_are_sparse() {
    let g1 = build_board_graph(1).unwrap();
    assert_eq!(g1.len(), 1);
    assert_eq!(g1.edge_count(), 0);

    let g2 = build_board_graph(2).unwrap();
    assert_eq!(g2.len(), 4);
    assert_eq!(g2.edge_count(), 0);

    let g3 = build_board_graph(3).unwrap();
    assert_eq!(g3.edge_count(), 8);
    let centre = g3.board().parse_label("b2").unwrap();
    assert_eq!(g3.degree(centre), 0);
    for s in g3.squares().filter(|&s| s != centre) {
        assert_eq!(g3.degree(s), 2);
    }

    assert_eq!(build_board_graph(4).unwrap().edge_count(), 24);
    assert_eq!(build_board_graph(5).unwrap().edge_count(), 48);
}

#[test]
fn zero_and_oversized_boards_are_rejected() {
    assert_eq!(
        build_board_graph(0).unwrap_err(),
        SquareError::InvalidBoardSize { size: 0 }
    );
    assert!(build_board_graph(27).is_err());
}

#[test]
fn builder_prunes_requested_edges_only() {
    let b = Board::standard();
    let a1 = sq(&b, "a1");
    let b3 = sq(&b, "b3");
    let c2 = sq(&b, "c2");

    let g = GraphBuilder::new(b).without_edge(b3, a1).build();
    assert!(!g.has_edge(a1, b3));
    assert!(!g.has_edge(b3, a1));
    assert!(g.has_edge(a1, c2));
    assert_eq!(g.edge_count(), 167);

    let g = GraphBuilder::new(b).isolate(sq(&b, "d4")).build();
    assert_eq!(g.degree(sq(&b, "d4")), 0);
    assert_eq!(g.edge_count(), 160);
}

#[test]
fn squares_of_a_larger_board_have_no_neighbours() {
    let g = build_board_graph(4).unwrap();
    let big = Board::standard();
    let h8 = big.square(64).unwrap();
    let a1 = big.square(1).unwrap();

    assert!(g.neighbors(h8).is_empty());
    assert_eq!(g.degree(h8), 0);
    assert!(!g.has_edge(h8, a1));
    assert!(!g.has_edge(a1, h8));

    let pruned = GraphBuilder::new(*g.board()).isolate(h8).build();
    assert_eq!(pruned.edge_count(), 24);
}
