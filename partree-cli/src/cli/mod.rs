//! Command-line interface for computing minimum spanning trees of graph
//! files.
//!
//! The `run` command loads a graph file, optionally reports the initial
//! partial trees, and prints the minimum spanning tree.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, LinkageArg, RunCommand, render_summary, run_cli,
};
