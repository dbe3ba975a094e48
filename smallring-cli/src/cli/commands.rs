//! Command implementations and argument parsing for the smallring CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use smallring_core::{
    DEFAULT_MAX_SHORTCUTS, DEFAULT_NODE_COUNT, DEFAULT_TRIALS_PER_COUNT, Edge, ExecutionStrategy,
    Graph, RingGraph, ShortcutLayout, ShortcutSet, SweepBuilder, SweepError, SweepResult,
    all_pairs_distances, diameter,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::pairs::{PairsParseError, parse_pairs};

/// Ring size used by `inspect` when `--nodes` is omitted.
const DEFAULT_INSPECT_NODES: usize = 22;
/// Hub used by `inspect` when only `--targets` is given.
const DEFAULT_HUB: usize = 0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "smallring",
    about = "Measure how random shortcuts shrink the diameter of a ring."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Average the diameter over random shortcut sets for each shortcut count.
    Sweep(SweepCommand),
    /// Report the diameter of a ring with an explicit shortcut layout, or of
    /// the bare ring when no layout is given.
    Inspect(InspectCommand),
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Number of nodes on the ring.
    #[arg(long, default_value_t = DEFAULT_NODE_COUNT)]
    pub nodes: usize,

    /// Explicit comma-separated shortcut counts, evaluated in the given order.
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with_all = ["start", "end", "step"],
    )]
    pub counts: Vec<usize>,

    /// First shortcut count of the range.
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Exclusive end of the shortcut count range.
    #[arg(long, default_value_t = DEFAULT_MAX_SHORTCUTS)]
    pub end: usize,

    /// Distance between consecutive shortcut counts in the range.
    #[arg(long, default_value_t = 1)]
    pub step: usize,

    /// Trials averaged per shortcut count.
    #[arg(long, default_value_t = DEFAULT_TRIALS_PER_COUNT)]
    pub trials: usize,

    /// Base seed; omit for a fresh random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How trials are scheduled.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

impl SweepCommand {
    /// Resolves the shortcut counts from `--counts` or the range flags.
    ///
    /// # Errors
    /// Returns [`CliError::ZeroStep`] when the range step is zero.
    pub fn shortcut_counts(&self) -> Result<Vec<usize>, CliError> {
        if !self.counts.is_empty() {
            return Ok(self.counts.clone());
        }
        if self.step == 0 {
            return Err(CliError::ZeroStep);
        }
        Ok((self.start..self.end).step_by(self.step).collect())
    }
}

/// Trial scheduling selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel when available, otherwise sequential.
    Auto,
    /// One trial at a time.
    Sequential,
    /// Trials spread over a thread pool.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Options accepted by the `inspect` command.
///
/// `--pairs` and the hub flags are mutually exclusive. `--targets` alone
/// joins node 0 to every target; no layout at all reports the bare ring.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Number of nodes on the ring.
    #[arg(long, default_value_t = DEFAULT_INSPECT_NODES)]
    pub nodes: usize,

    /// Shortcut pairs as a list literal, for example `[(0,4),(7,12)]`.
    #[arg(long, conflicts_with_all = ["center", "targets"])]
    pub pairs: Option<String>,

    /// Hub node joined to every target; defaults to node 0.
    #[arg(long)]
    pub center: Option<usize>,

    /// Targets of the hub, separated by commas or spaces.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub targets: Vec<usize>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The `--pairs` literal could not be parsed.
    #[error("invalid --pairs literal: {0}")]
    Pairs(#[from] PairsParseError),
    /// The shortcut range cannot advance.
    #[error("--step must be at least 1")]
    ZeroStep,
    /// Core validation or computation failed.
    #[error(transparent)]
    Core(#[from] SweepError),
}

/// Textual report of one explicit layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    /// Ring size.
    pub node_count: usize,
    /// Shortcuts added to the ring, canonical and sorted.
    pub shortcuts: ShortcutSet,
    /// Ring-adjacent pairs that were skipped.
    pub redundant: Vec<Edge>,
    /// Diameter of the bare ring.
    pub ring_diameter: usize,
    /// Diameter with the shortcuts added.
    pub diameter: u32,
    /// Unordered node pairs without a connecting path.
    pub unreachable_pairs: usize,
}

/// Outcome of a CLI command, ready to render.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Aggregated sweep.
    Sweep(SweepResult),
    /// Single layout report.
    Inspect(InspectReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when argument resolution or the core fails.
///
/// # Examples
/// ```
/// use smallring_cli::cli::{Cli, Command, ExecutionSummary, InspectCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Inspect(InspectCommand {
///         nodes: 12,
///         pairs: Some("[(0,6),(3,9)]".to_owned()),
///         center: None,
///         targets: Vec::new(),
///     }),
/// };
/// let ExecutionSummary::Inspect(report) = run_cli(cli).expect("inspect succeeds") else {
///     panic!("inspect returns a report");
/// };
/// assert_eq!(report.ring_diameter, 6);
/// assert_eq!(report.diameter, 4);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Sweep(sweep) => {
            Span::current().record("command", field::display("sweep"));
            run_sweep_command(&sweep).map(ExecutionSummary::Sweep)
        }
        Command::Inspect(inspect) => {
            Span::current().record("command", field::display("inspect"));
            run_inspect_command(&inspect).map(ExecutionSummary::Inspect)
        }
    }
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        trials = command.trials,
        strategy = ?command.strategy,
        counts = field::Empty,
        seed = field::Empty,
    ),
)]
pub(super) fn run_sweep_command(command: &SweepCommand) -> Result<SweepResult, CliError> {
    let counts = command.shortcut_counts()?;
    let span = Span::current();
    span.record("counts", counts.len());

    let mut builder = SweepBuilder::new()
        .with_node_count(command.nodes)
        .with_shortcut_counts(counts)
        .with_trials_per_count(command.trials)
        .with_execution_strategy(command.strategy.into());
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    let driver = builder.build()?;
    span.record("seed", driver.config().seed());

    let result = driver.run()?;
    info!(
        points = result.len(),
        seed = result.seed(),
        "sweep command completed"
    );
    Ok(result)
}

#[instrument(
    name = "cli.inspect",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        layout = field::Empty,
        shortcuts = field::Empty,
        redundant = field::Empty,
    ),
)]
pub(super) fn run_inspect_command(command: &InspectCommand) -> Result<InspectReport, CliError> {
    let ring = RingGraph::build(command.nodes)?;
    let span = Span::current();
    let layout = match (&command.pairs, command.center) {
        (Some(literal), _) => {
            span.record("layout", field::display("pairs"));
            ShortcutSet::from_pairs(&ring, parse_pairs(literal)?)?
        }
        (None, center) if center.is_some() || !command.targets.is_empty() => {
            span.record("layout", field::display("star"));
            let hub = center.unwrap_or(DEFAULT_HUB);
            ShortcutSet::star(&ring, hub, command.targets.iter().copied())?
        }
        (None, _) => {
            span.record("layout", field::display("ring"));
            ShortcutLayout::default()
        }
    };
    span.record("shortcuts", layout.shortcuts.len());
    span.record("redundant", layout.redundant.len());

    let report = inspect_layout(&ring, layout)?;
    info!(
        diameter = report.diameter,
        ring_diameter = report.ring_diameter,
        "inspect command completed"
    );
    Ok(report)
}

fn inspect_layout(ring: &RingGraph, layout: ShortcutLayout) -> Result<InspectReport, CliError> {
    let matrix = all_pairs_distances(&Graph::with_shortcuts(ring, &layout.shortcuts)?);
    Ok(InspectReport {
        node_count: ring.node_count(),
        diameter: diameter(&matrix)?,
        unreachable_pairs: matrix.unreachable_pairs(),
        ring_diameter: ring.natural_diameter(),
        shortcuts: layout.shortcuts,
        redundant: layout.redundant,
    })
}

/// Renders `summary` to `writer`.
///
/// Sweeps print a `#` comment with the parameters, a header row, and one
/// tab-separated row per shortcut count. Inspect reports print one
/// `label: value` line per field.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use smallring_cli::cli::{ExecutionSummary, render_summary};
/// use smallring_core::SweepBuilder;
///
/// let result = SweepBuilder::new()
///     .with_node_count(6)
///     .with_shortcut_counts([0])
///     .with_trials_per_count(1)
///     .with_seed(3)
///     .build()
///     .and_then(|driver| driver.run())
///     .expect("sweep succeeds");
/// let mut buffer = Vec::new();
/// render_summary(&ExecutionSummary::Sweep(result), &mut buffer).expect("write succeeds");
/// let text = String::from_utf8(buffer).expect("utf-8");
/// assert_eq!(text.lines().last(), Some("0\t3.000\t3\t3"));
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Sweep(result) => render_sweep(result, writer),
        ExecutionSummary::Inspect(report) => render_inspect(report, writer),
    }
}

fn render_sweep(result: &SweepResult, mut writer: impl Write) -> io::Result<()> {
    let trials = result.points().first().map_or(0, |point| point.trials());
    writeln!(
        writer,
        "# nodes={} trials={} seed={}",
        result.node_count(),
        trials,
        result.seed()
    )?;
    writeln!(writer, "shortcut_count\tmean_diameter\tmin_diameter\tmax_diameter")?;
    for point in result {
        writeln!(
            writer,
            "{}\t{:.3}\t{}\t{}",
            point.shortcut_count(),
            point.mean_diameter(),
            point.min_diameter(),
            point.max_diameter()
        )?;
    }
    Ok(())
}

fn render_inspect(report: &InspectReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "nodes: {}", report.node_count)?;
    writeln!(writer, "shortcuts: {}", join_edges(report.shortcuts.iter()))?;
    writeln!(writer, "redundant: {}", join_edges(report.redundant.iter()))?;
    writeln!(writer, "ring diameter: {}", report.ring_diameter)?;
    writeln!(writer, "diameter: {}", report.diameter)?;
    writeln!(writer, "unreachable pairs: {}", report.unreachable_pairs)?;
    Ok(())
}

fn join_edges<'a>(edges: impl Iterator<Item = &'a Edge>) -> String {
    let rendered: Vec<String> = edges.map(ToString::to_string).collect();
    if rendered.is_empty() {
        "none".to_owned()
    } else {
        rendered.join(" ")
    }
}
