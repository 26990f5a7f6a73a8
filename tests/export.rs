use knight_paths::board::Board;
use knight_paths::export::dot::{render_dot, write_dot};
use knight_paths::export::raster::{
    cell_center, render_graph, render_paths, save_png, RenderOptions, BACKGROUND, DARK_SQUARE,
    LIGHT_SQUARE, NODE_FILL, PATH_COLOR,
};
use knight_paths::export::PathSummary;
use knight_paths::graph::build_board_graph;
use knight_paths::search::{shortest_paths, PathSet};

fn query(from: &str, to: &str) -> (Board, PathSet) {
    let g = build_board_graph(8).unwrap();
    let b = *g.board();
    let ps = shortest_paths(&g, b.parse_label(from).unwrap(), b.parse_label(to).unwrap()).unwrap();
    (b, ps)
}

#[test]
fn dot_lists_every_move_in_path_order() {
    let (b, ps) = query("a1", "b1");
    assert_eq!(
        render_dot(&b, &ps, true),
        "digraph shortest_paths {\n\
         \ta1 -> b3;\n\
         \tb3 -> d2;\n\
         \td2 -> b1;\n\
         \ta1 -> c2;\n\
         \tc2 -> a3;\n\
         \ta3 -> b1;\n\
         }\n"
    );
}

#[test]
fn dot_collapses_repeated_edges_unless_allowed() {
    let (b, ps) = query("a1", "h8");
    let total_moves = ps.len() * ps.moves() as usize;

    let with_dups = render_dot(&b, &ps, true);
    let without = render_dot(&b, &ps, false);
    let statements = |s: &str| s.lines().filter(|l| l.contains("->")).count();

    assert_eq!(statements(&with_dups), total_moves);
    assert!(statements(&without) < total_moves);

    let mut lines: Vec<&str> = without.lines().filter(|l| l.contains("->")).collect();
    let n = lines.len();
    lines.sort();
    lines.dedup();
    assert_eq!(lines.len(), n);
}

#[test]
fn dot_for_a_zero_move_query_is_an_empty_digraph() {
    let (b, ps) = query("d4", "d4");
    assert_eq!(render_dot(&b, &ps, false), "digraph shortest_paths {\n}\n");
}

#[test]
fn write_dot_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("paths.dot");
    let (b, ps) = query("a1", "c2");

    write_dot(&b, &ps, false, &file).unwrap();
    let text = std::fs::read_to_string(&file).unwrap();
    assert_eq!(text, "digraph shortest_paths {\n\ta1 -> c2;\n}\n");
}

#[test]
fn write_dot_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("missing").join("paths.dot");
    let (b, ps) = query("a1", "c2");
    let err = write_dot(&b, &ps, false, &file).unwrap_err();
    assert!(err.to_string().contains("dot_export_create"), "{err}");
}

#[test]
fn path_overlay_marks_moves_on_a_checkerboard() {
    let opts = RenderOptions { cell_size: 40 };
    let (b, ps) = query("a1", "c2");
    let img = render_paths(&b, &ps, opts);
    assert_eq!(img.dimensions(), (320, 320));

    // Arrow starts at the centre of a1.
    let (x, y) = cell_center(&b, ps.source(), opts);
    assert_eq!((x, y), (20, 300));
    assert_eq!(*img.get_pixel(x, y), PATH_COLOR);

    // Untouched corners keep the checkerboard: h8 is dark, a8 is light.
    assert_eq!(*img.get_pixel(318, 1), DARK_SQUARE);
    assert_eq!(*img.get_pixel(1, 1), LIGHT_SQUARE);
}

#[test]
fn graph_preview_draws_every_square() {
    let g = build_board_graph(4).unwrap();
    let opts = RenderOptions { cell_size: 32 };
    let img = render_graph(&g, opts);
    assert_eq!(img.dimensions(), (128, 128));

    for sq in g.squares() {
        let (x, y) = cell_center(g.board(), sq, opts);
        assert_eq!(*img.get_pixel(x, y), NODE_FILL);
    }
    assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
}

#[test]
fn save_png_round_trips_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("board.png");
    let (b, ps) = query("a1", "h8");
    let img = render_paths(&b, &ps, RenderOptions { cell_size: 16 });

    save_png(&img, &file).unwrap();
    let loaded = image::open(&file).unwrap().to_rgb8();
    assert_eq!(loaded.dimensions(), (128, 128));
    assert_eq!(loaded.get_pixel(5, 5), img.get_pixel(5, 5));
}

#[test]
fn summary_uses_labels() {
    let (b, ps) = query("a1", "b1");
    let summary = PathSummary::new(&b, &ps);
    assert_eq!(summary.from, "a1");
    assert_eq!(summary.to, "b1");
    assert_eq!(summary.moves, 3);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.paths[1], vec!["a1", "c2", "a3", "b1"]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["count"], 2);
}

#[test]
fn oversized_cells_are_clamped() {
    let (b, ps) = query("a1", "c2");
    let img = render_paths(&b, &ps, RenderOptions { cell_size: u32::MAX });
    assert_eq!(img.dimensions(), (8 * 256, 8 * 256));

    let g = build_board_graph(3).unwrap();
    let img = render_graph(&g, RenderOptions { cell_size: 1 });
    assert_eq!(img.dimensions(), (24, 24));
}
