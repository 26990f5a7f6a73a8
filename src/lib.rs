//! Knight-move graphs on an N×N board and enumeration of every shortest
//! knight path between two squares.
//!
//! ```
//! use knight_paths::board::Board;
//! use knight_paths::graph::build_board_graph;
//! use knight_paths::search::shortest_paths;
//!
//! let graph = build_board_graph(8).unwrap();
//! let board = Board::standard();
//! let a1 = board.parse_label("a1").unwrap();
//! let h8 = board.parse_label("h8").unwrap();
//! let paths = shortest_paths(&graph, a1, h8).unwrap();
//! assert_eq!(paths.moves(), 6);
//! ```

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod graph;
pub mod input;
pub mod search;
