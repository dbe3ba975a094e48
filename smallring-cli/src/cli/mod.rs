//! Command-line interface for ring shortcut sweeps.
//!
//! `sweep` averages diameters over random shortcut sets and prints one
//! tab-separated row per shortcut count. `inspect` measures one explicit
//! layout, given either as a pair list or as a hub with targets.

mod commands;
mod pairs;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, InspectCommand, InspectReport, StrategyArg,
    SweepCommand, render_summary, run_cli,
};
pub use pairs::{PairsParseError, parse_pairs};

#[cfg(test)]
mod test_helpers;
