//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    AdjacencyMatrix, DisconnectedPolicy, DistanceError, MstError, PrimBuilder, SpanningTree,
    TreeReport, VerificationError, pairwise_distances, verify_spanning_tree,
};
use arbor_providers_delimited::{DelimitedError, load_adjacency_matrix_path, load_points_path};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Build minimum spanning trees of dense graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a minimum spanning tree with Prim's algorithm.
    #[command(subcommand)]
    Mst(MstCommand),
}

/// Input formats accepted by the `mst` command.
#[derive(Debug, Subcommand, Clone)]
pub enum MstCommand {
    /// Read a comma-separated adjacency matrix, one row per line.
    Matrix(InputArgs),
    /// Read one point per line and use Euclidean distances as weights.
    Points(InputArgs),
}

/// Arguments shared by every input format.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Path to the input file.
    pub path: PathBuf,

    /// Override name for the input (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// Tree construction and verification options.
    #[command(flatten)]
    pub options: TreeOptions,
}

/// Options controlling construction and verification.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct TreeOptions {
    /// Vertex the tree is grown from.
    #[arg(long = "start-vertex", default_value_t = 0)]
    pub start_vertex: usize,

    /// Return the tree of the start vertex's component instead of failing
    /// on disconnected graphs.
    #[arg(long = "allow-partial")]
    pub allow_partial: bool,

    /// Fail unless the tree weighs this much, within `--tolerance`.
    #[arg(long = "expected-weight")]
    pub expected_weight: Option<f64>,

    /// Absolute tolerance for weight comparisons.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            start_vertex: 0,
            allow_partial: false,
            expected_weight: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the input failed.
    #[error(transparent)]
    Delimited(#[from] DelimitedError),
    /// Building the distance graph from points failed.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// Tree construction failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// The tree failed verification.
    #[error(transparent)]
    Verification(#[from] VerificationError),
    /// An expected weight was supplied for a tree that does not span the
    /// graph.
    #[error("cannot check the weight of a partial tree covering {covered} of {node_count} vertices")]
    PartialTree {
        /// Vertices covered by the tree.
        covered: usize,
        /// Vertices in the graph.
        node_count: usize,
    },
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Delimited(err) => err.code().as_str(),
            Self::Distance(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
            Self::Verification(err) => err.code().as_str(),
            Self::PartialTree { .. } => "CLI_PARTIAL_TREE",
        }
    }
}

/// Outcome of a successful `mst` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the input, from `--name` or the file stem.
    pub source: String,
    /// The constructed tree.
    pub tree: SpanningTree,
    /// Verification summary, present when the tree spans the graph.
    pub report: Option<TreeReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, construction, or verification fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, InputArgs, MstCommand, TreeOptions, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,1,2\n1,0,1\n2,1,0\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand::Matrix(InputArgs {
///         path: file.path().to_path_buf(),
///         name: None,
///         options: TreeOptions::default(),
///     })),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.edge_count(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(input = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Command::Mst(command) = cli.command;
    let span = Span::current();
    match command {
        MstCommand::Matrix(args) => {
            span.record("input", "matrix");
            let graph = load_adjacency_matrix_path(&args.path)?;
            run_tree(&graph, &args)
        }
        MstCommand::Points(args) => {
            span.record("input", "points");
            let points = load_points_path(&args.path)?;
            let graph = pairwise_distances(&points)?;
            run_tree(&graph, &args)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip_all,
    fields(
        path = %args.path.display(),
        vertices = graph.len(),
        start_vertex = args.options.start_vertex,
    ),
)]
pub(super) fn run_tree(
    graph: &AdjacencyMatrix,
    args: &InputArgs,
) -> Result<ExecutionSummary, CliError> {
    let options = &args.options;
    let policy = if options.allow_partial {
        DisconnectedPolicy::Partial
    } else {
        DisconnectedPolicy::Reject
    };
    let tree = PrimBuilder::new()
        .with_start_vertex(options.start_vertex)
        .with_disconnected_policy(policy)
        .build(graph)?;

    let report = if tree.is_spanning() {
        Some(verify_spanning_tree(
            graph,
            &tree,
            options.expected_weight,
            options.tolerance,
        )?)
    } else if options.expected_weight.is_some() {
        return Err(CliError::PartialTree {
            covered: tree.edge_count() + 1,
            node_count: graph.len(),
        });
    } else {
        warn!(edges = tree.edge_count(), "returning a partial tree without verification");
        None
    };

    let source = derive_source_name(&args.path, args.name.as_deref());
    info!(
        source = source.as_str(),
        edges = tree.edge_count(),
        total_weight = tree.total_weight(),
        "spanning tree built"
    );
    Ok(ExecutionSummary {
        source,
        tree,
        report,
    })
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as a header followed by one tab-separated
/// line per edge in selection order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, render_summary};
/// # use arbor_core::{AdjacencyMatrix, prim_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = AdjacencyMatrix::try_from_rows(vec![vec![0.0, 2.5], vec![2.5, 0.0]])?;
/// let summary = ExecutionSummary {
///     source: "pair".into(),
///     tree: prim_mst(&graph)?,
///     report: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "source: pair\nvertices: 2\nedges: 1\ntotal weight: 2.5\n0\t1\t2.5\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let tree = &summary.tree;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "vertices: {}", tree.len())?;
    writeln!(writer, "edges: {}", tree.edge_count())?;
    writeln!(writer, "total weight: {}", tree.total_weight())?;
    for edge in tree.edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    Ok(())
}
