use std::path::PathBuf;

use knight_paths::export::PathSummary;
use knight_paths::graph::build_board_graph;
use knight_paths::search::shortest_paths;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct QuerySpec {
    size: usize,
    from: String,
    to: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Expected {
    moves: u32,
    count: usize,
    first: Vec<String>,
    last: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GoldenCase {
    query: QuerySpec,
    expected: Expected,
}

#[test]
fn golden_path_counts_match() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("paths");

    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .expect("failed to read golden paths directory")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|e| e == "json").unwrap_or(false))
        .collect();
    files.sort();

    assert!(!files.is_empty(), "no golden path JSONs found");

    for path in files {
        let bytes = std::fs::read(&path).expect("failed to read golden path file");
        let case: GoldenCase =
            serde_json::from_slice(&bytes).expect("failed to parse golden path JSON");

        let g = build_board_graph(case.query.size).unwrap();
        let b = *g.board();
        let from = b.parse_label(&case.query.from).unwrap();
        let to = b.parse_label(&case.query.to).unwrap();

        let summary = PathSummary::new(&b, &shortest_paths(&g, from, to).unwrap());
        let name = path.display();
        assert_eq!(summary.moves, case.expected.moves, "moves for {name}");
        assert_eq!(summary.count, case.expected.count, "count for {name}");
        assert_eq!(summary.paths.first(), Some(&case.expected.first), "first for {name}");
        assert_eq!(summary.paths.last(), Some(&case.expected.last), "last for {name}");
    }
}
