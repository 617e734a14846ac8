//! Command-line interface for building minimum spanning trees.
//!
//! `arbor mst matrix <PATH>` reads a comma-separated adjacency matrix and
//! `arbor mst points <PATH>` reads a point set and builds its Euclidean
//! distance graph. Both run Prim's algorithm, verify the result and print
//! the tree.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, InputArgs, MstCommand, TreeOptions, render_summary,
    run_cli,
};
