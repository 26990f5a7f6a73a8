use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use knight_paths::board::Board;
use knight_paths::config::RunConfig;
use knight_paths::core::square::Square;
use knight_paths::export::dot::write_dot;
use knight_paths::export::raster::{render_graph, render_paths, save_png};
use knight_paths::export::PathSummary;
use knight_paths::graph::{GraphBuilder, KnightGraph};
use knight_paths::input::{parse_square, parse_yes_no, prompt_square, prompt_yes_no, square_prompt};
use knight_paths::search::shortest_paths;

const USAGE: &str = "Usage: knight_paths [--config <file.json>] [--size <n>] [--from <square>] \
[--to <square>] [--multi-arrows y|n] [--out-dir <dir>] [--no-images] [--json]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    size: Option<usize>,
    from: Option<String>,
    to: Option<String>,
    multi_arrows: Option<String>,
    out_dir: Option<PathBuf>,
    no_images: bool,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut out = Args::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = |i: usize| -> Result<String, String> {
            args.get(i + 1)
                .cloned()
                .ok_or_else(|| format!("{flag} requires an argument"))
        };
        match flag {
            "--config" => {
                out.config = Some(PathBuf::from(value(i)?));
                i += 2;
            }
            "--size" => {
                let v = value(i)?;
                out.size = Some(v.parse().map_err(|e| format!("invalid --size {v}: {e}"))?);
                i += 2;
            }
            "--from" => {
                out.from = Some(value(i)?);
                i += 2;
            }
            "--to" => {
                out.to = Some(value(i)?);
                i += 2;
            }
            "--multi-arrows" => {
                out.multi_arrows = Some(value(i)?);
                i += 2;
            }
            "--out-dir" => {
                out.out_dir = Some(PathBuf::from(value(i)?));
                i += 2;
            }
            "--no-images" => {
                out.no_images = true;
                i += 1;
            }
            "--json" => {
                out.json = true;
                i += 1;
            }
            "--help" | "-h" => return Err(String::new()),
            x => return Err(format!("Unknown option: {x}")),
        }
    }
    Ok(out)
}

fn usage_exit(msg: &str) -> ! {
    if !msg.is_empty() {
        eprintln!("{msg}\n");
    }
    eprintln!("{USAGE}");
    std::process::exit(2);
}

/// Use the flag value if present, otherwise prompt until a valid square is read.
fn resolve_square(
    flag: Option<&str>,
    board: &Board,
    which: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Square {
    if let Some(text) = flag {
        return match parse_square(board, text) {
            Ok(sq) => sq,
            Err(e) => usage_exit(&format!("invalid {which} square {text:?}: {e}")),
        };
    }
    match prompt_square(input, output, board, &square_prompt(board, which)) {
        Ok(Some(sq)) => sq,
        Ok(None) => usage_exit("input closed before a square was entered"),
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            std::process::exit(1);
        }
    }
}

fn resolve_multi_arrows(
    flag: Option<&str>,
    configured: Option<bool>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> bool {
    if let Some(text) = flag {
        return parse_yes_no(text)
            .unwrap_or_else(|| usage_exit(&format!("--multi-arrows expects y or n, got {text:?}")));
    }
    if let Some(v) = configured {
        return v;
    }
    match prompt_yes_no(input, output, "Allow multiple arrows between same nodes (y/n)? ") {
        Ok(Some(v)) => v,
        Ok(None) => usage_exit("input closed before an answer was entered"),
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            std::process::exit(1);
        }
    }
}

fn write_graph_preview(cfg: &RunConfig, graph: &KnightGraph) {
    let Some(path) = cfg.graph_image_path() else {
        return;
    };
    let img = render_graph(graph, cfg.render_options());
    if let Err(e) = save_png(&img, &path) {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv).unwrap_or_else(|e| usage_exit(&e));

    let mut cfg = match &args.config {
        Some(path) => match RunConfig::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(2);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(n) = args.size {
        cfg.board_size = n;
    }
    if let Some(dir) = args.out_dir.clone() {
        cfg.out_dir = dir;
    }
    if args.no_images {
        cfg = cfg.without_images();
    }

    let board = match cfg.board() {
        Ok(b) => b,
        Err(e) => usage_exit(&e.to_string()),
    };

    if let Err(e) = std::fs::create_dir_all(&cfg.out_dir) {
        eprintln!("Failed to create {}: {e}", cfg.out_dir.display());
        std::process::exit(1);
    }

    let graph = GraphBuilder::new(board).build();
    write_graph_preview(&cfg, &graph);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let source = resolve_square(args.from.as_deref(), &board, "first", &mut input, &mut output);
    let target = resolve_square(args.to.as_deref(), &board, "second", &mut input, &mut output);
    let multi_arrows = resolve_multi_arrows(
        args.multi_arrows.as_deref(),
        cfg.allow_duplicate_edges,
        &mut input,
        &mut output,
    );

    let paths = match shortest_paths(&graph, source, target) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Query failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_dot(&board, &paths, multi_arrows, &cfg.dot_path()) {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }
    if let Some(path) = cfg.board_image_path() {
        let img = render_paths(&board, &paths, cfg.render_options());
        if let Err(e) = save_png(&img, &path) {
            eprintln!("Export failed: {e}");
            std::process::exit(1);
        }
    }

    if args.json {
        let summary = PathSummary::new(&board, &paths);
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize summary: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Starting at: {}", board.label(paths.source()));
    println!("Ending at: {}", board.label(paths.target()));
    println!(
        "Found {} minimum paths of length {}.",
        paths.len(),
        paths.moves()
    );
}
