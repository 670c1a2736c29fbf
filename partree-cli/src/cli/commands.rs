//! Command implementations and argument parsing for the partree CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use partree_core::{Graph, Linkage, MstBuilder, MstError, SpanningTree, VertexId};
use partree_providers_text::{GraphFile, GraphFileError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "partree",
    about = "Compute minimum spanning trees by merging partial trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of a graph file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the graph file.
    pub path: PathBuf,

    /// How partial tree roots are linked when trees merge.
    #[arg(long, value_enum, default_value_t = LinkageArg::Compressed)]
    pub linkage: LinkageArg,

    /// Print every initial partial tree before running.
    #[arg(long)]
    pub show_trees: bool,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Root linkage strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkageArg {
    /// Union by rank with path compression.
    Compressed,
    /// Absorbed roots point at the survivor without compression.
    Chained,
}

impl From<LinkageArg> for Linkage {
    fn from(value: LinkageArg) -> Self {
        match value {
            LinkageArg::Compressed => Self::Compressed,
            LinkageArg::Chained => Self::Chained,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened or parsed.
    #[error(transparent)]
    GraphFile(#[from] GraphFileError),
    /// The merge loop failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::GraphFile(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph, from `--name` or the file stem.
    pub graph_name: String,
    /// Graph the tree was computed for.
    pub graph: Graph,
    /// Rendered initial partial trees, present when `--show-trees` is set.
    pub initial_trees: Option<Vec<String>>,
    /// Minimum spanning tree.
    pub tree: SpanningTree,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or computing the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use partree_cli::cli::{Cli, Command, LinkageArg, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\nA\nB\nC\nA B 4\nB C 1\nA C 2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         linkage: LinkageArg::Compressed,
///         show_trees: false,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = %command.path.display(), linkage = field::Empty, graph = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        linkage,
        show_trees,
        name,
    } = command;
    let solver = MstBuilder::new().with_linkage(linkage.into()).build();

    let span = Span::current();
    span.record("linkage", field::display(solver.linkage().as_str()));

    let file = GraphFile::from_path(&path)?;
    let file = match name {
        Some(name) => file.with_name(name),
        None => file,
    };
    let graph_name = file.name().to_owned();
    span.record("graph", field::display(&graph_name));
    let graph = file.into_graph();

    let list = solver.initialize(&graph);
    let initial_trees = show_trees.then(|| {
        list.iter()
            .map(|tree| tree.display(&graph).to_string())
            .collect()
    });
    let tree = solver.run_initialized(list)?;

    info!(
        graph = graph_name.as_str(),
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph_name,
        graph,
        initial_trees,
        tree,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Tree edges are written one per line as `<a> <b> <weight>`, lightest
/// first.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let name = |vertex: VertexId| summary.graph.name(vertex).unwrap_or("?");

    writeln!(writer, "graph: {}", summary.graph_name)?;
    writeln!(writer, "vertices: {}", summary.graph.len())?;
    for tree in summary.initial_trees.iter().flatten() {
        writeln!(writer, "{tree}")?;
    }
    writeln!(writer, "mst weight: {}", summary.tree.total_weight())?;
    for edge in summary.tree.edges() {
        let (a, b) = edge.endpoints();
        writeln!(writer, "{} {} {}", name(a), name(b), edge.weight())?;
    }
    Ok(())
}
