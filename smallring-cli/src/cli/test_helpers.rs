//! Small helpers shared across CLI tests.

use super::{Cli, CliError, Command, ExecutionSummary, InspectCommand, StrategyArg, SweepCommand};
use super::{render_summary, run_cli};

pub(super) fn sweep_command(nodes: usize, counts: &[usize], trials: usize) -> SweepCommand {
    SweepCommand {
        nodes,
        counts: counts.to_vec(),
        start: 0,
        end: 0,
        step: 1,
        trials,
        seed: Some(1),
        strategy: StrategyArg::Sequential,
    }
}

pub(super) fn pairs_command(nodes: usize, literal: &str) -> InspectCommand {
    InspectCommand {
        nodes,
        pairs: Some(literal.to_owned()),
        center: None,
        targets: Vec::new(),
    }
}

pub(super) fn star_command(nodes: usize, center: usize, targets: &[usize]) -> InspectCommand {
    InspectCommand {
        nodes,
        pairs: None,
        center: Some(center),
        targets: targets.to_vec(),
    }
}

pub(super) fn run_cli_expecting_error(command: Command, panic_msg: &str) -> CliError {
    match run_cli(Cli { command }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_summary(summary, &mut buffer) {
        panic!("rendering into memory failed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("rendered output is not UTF-8: {err}"),
    }
}
