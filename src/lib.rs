//! xcconfig-graph: include graphs for Xcode build configuration files
//!
//! Scan a repository for `.xcconfig` files, follow their `#include` /
//! `#include?` directives and export the resulting graph as Graphviz DOT.
//!
//! # Features
//! - Repository root discovery through `git rev-parse --show-toplevel`
//! - Substring ignore list for vendored directories (`third-party`, `submodules`)
//! - Deterministic DOT output; optional JSON and SVG (via Graphviz)
//! - Optional `xcconfig-graph.toml` at the repository root
//!
//! # Quickstart (Library)
//! ```no_run
//! use xcconfig_graph::scanner::{ScanConfig, Scanner};
//!
//! let scanner = Scanner::discover(std::path::Path::new("."), ScanConfig::default())
//!     .expect("inside a git repository");
//! let graph = scanner.scan().expect("scan");
//! graph.export_graph_description(&scanner.output_path()).expect("write DOT");
//! println!("nodes: {} edges: {}", graph.len(), graph.edge_count());
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! xcconfig-graph                 # writes <root>/config.dot
//! xcconfig-graph --svg graph.svg --ignore Pods
//! ```
//!
//! Edges point from the included file to the file that includes it.
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod parser;
pub mod scanner;
pub mod utils;
pub mod visualization;
