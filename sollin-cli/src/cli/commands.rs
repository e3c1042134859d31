//! Command implementations and argument parsing for the sollin CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sollin_core::{EdgeId, Sollin, SollinBuilder, SollinError, Weight};
use sollin_providers_edge_list::{EdgeListError, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sollin",
    about = "Compute minimum spanning trees with a parallel Borůvka/Sollin engine."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a `V E` / `u v w` edge-list file.
    pub path: PathBuf,

    /// Number of workers (defaults to the available parallelism).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Numeric type used to parse edge weights.
    #[arg(long, value_enum, default_value_t = WeightKind::Int)]
    pub weights: WeightKind,

    /// Print the selected edges after the summary.
    #[arg(long = "show-edges")]
    pub show_edges: bool,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Weight types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightKind {
    /// Signed 64-bit integers.
    Int,
    /// 64-bit floating point values.
    Float,
}

impl WeightKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed into a graph.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Configuring or running the engine failed.
    #[error(transparent)]
    Core(#[from] SollinError),
}

impl CliError {
    /// Returns a stable, machine-readable code for the error.
    ///
    /// # Examples
    /// ```
    /// use sollin_cli::cli::CliError;
    /// use sollin_core::SollinError;
    ///
    /// let err = CliError::from(SollinError::InvalidWorkerCount { got: 0 });
    /// assert_eq!(err.code(), "SOLLIN_INVALID_WORKER_COUNT");
    /// ```
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList(err) => err.code(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Total weight of a tree in the numeric type it was computed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeWeight {
    /// Integer weight.
    Int(i64),
    /// Floating-point weight.
    Float(f64),
}

impl From<i64> for TreeWeight {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for TreeWeight {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for TreeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// An edge chosen for the spanning tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedEdge {
    /// Position of the edge in the input file.
    pub id: EdgeId,
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: TreeWeight,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded graph.
    pub graph: String,
    /// Total weight of the spanning tree.
    pub total_weight: TreeWeight,
    /// Number of Borůvka iterations performed.
    pub iterations: usize,
    /// Number of workers that took part in the run.
    pub worker_count: usize,
    /// Selected edges in selection order; empty unless requested.
    pub edges: Vec<SelectedEdge>,
    /// Wall-clock time spent in the engine.
    pub elapsed: Duration,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or running the engine fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sollin_cli::cli::{Cli, Command, RunCommand, TreeWeight, WeightKind, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n0 1 4\n1 2 1\n0 2 2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         workers: Some(2),
///         weights: WeightKind::Int,
///         show_edges: false,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.total_weight, TreeWeight::Int(3));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
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
    fields(
        path = field::Empty,
        workers = field::Empty,
        weights = field::Empty,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        workers,
        weights,
        show_edges,
        name,
    } = command;

    let mut builder = SollinBuilder::new().with_edge_recording(show_edges);
    if let Some(count) = workers {
        builder = builder.with_worker_count(count);
    }
    let sollin = builder.build()?;

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("workers", field::display(sollin.worker_count()));
    span.record("weights", field::display(weights.label()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let graph_name = derive_graph_name(&path, name.as_deref());
    let summary = match weights {
        WeightKind::Int => solve::<i64>(&sollin, &path, graph_name)?,
        WeightKind::Float => solve::<f64>(&sollin, &path, graph_name)?,
    };

    info!(
        graph = summary.graph.as_str(),
        weight = %summary.total_weight,
        iterations = summary.iterations,
        "command completed"
    );
    Ok(summary)
}

fn solve<W>(sollin: &Sollin, path: &Path, graph_name: String) -> Result<ExecutionSummary, CliError>
where
    W: Weight + FromStr + Into<TreeWeight>,
{
    let reader = open_graph_reader(path)?;
    let provider = EdgeListProvider::<W>::try_from_reader(graph_name, reader)?;
    let graph = provider.graph();

    let started = Instant::now();
    let tree = sollin.run(graph)?;
    let elapsed = started.elapsed();

    let edges = tree
        .edges()
        .iter()
        .filter_map(|&id| {
            graph.edge(id).map(|edge| SelectedEdge {
                id,
                source: edge.source(),
                target: edge.target(),
                weight: edge.weight().into(),
            })
        })
        .collect();

    Ok(ExecutionSummary {
        graph: provider.name().to_owned(),
        total_weight: tree.total_weight().into(),
        iterations: tree.iterations(),
        worker_count: tree.worker_count(),
        edges,
        elapsed,
    })
}

#[instrument(name = "cli.open_graph_reader", err, fields(path = field::Empty))]
pub(super) fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::time::Duration;
/// # use sollin_cli::cli::{ExecutionSummary, TreeWeight, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     graph: "demo".into(),
///     total_weight: TreeWeight::Int(19),
///     iterations: 1,
///     worker_count: 2,
///     edges: Vec::new(),
///     elapsed: Duration::from_millis(3),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("Weight of MST : 19\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Weight of MST : {}", summary.total_weight)?;
    writeln!(writer, "Iterations : {}", summary.iterations)?;
    writeln!(writer, "Workers : {}", summary.worker_count)?;
    writeln!(
        writer,
        "Execution time : {:.6}",
        summary.elapsed.as_secs_f64()
    )?;
    if !summary.edges.is_empty() {
        writeln!(writer, "Edges :")?;
        for edge in &summary.edges {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                edge.id, edge.source, edge.target, edge.weight
            )?;
        }
    }
    Ok(())
}
