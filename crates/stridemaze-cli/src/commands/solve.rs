//! Solve command: read a maze, search it, print the cheapest route.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use stridemaze_lib::{load_maze, solve, solve_maze, GoalTieBreak, Outcome};

use crate::output::OutputFormat;

/// Tie-break policy exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TieBreak {
    /// Among equally cheap goal states, arrive with the smallest stride.
    #[default]
    LowestStride,
    /// Among equally cheap goal states, arrive with the largest stride.
    HighestStride,
}

impl From<TieBreak> for GoalTieBreak {
    fn from(value: TieBreak) -> Self {
        match value {
            TieBreak::LowestStride => GoalTieBreak::LowestStride,
            TieBreak::HighestStride => GoalTieBreak::HighestStride,
        }
    }
}

/// Arguments for the solve command.
#[derive(Debug, Clone, Args)]
pub struct SolveCommandArgs {
    /// Maze description file. Reads stdin when omitted or `-`.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Which equally cheap goal state to report.
    #[arg(long, value_enum, default_value_t = TieBreak::LowestStride)]
    pub tie_break: TieBreak,
}

/// Handle the solve command, writing the result to stdout.
pub fn handle_solve_command(args: &SolveCommandArgs) -> Result<()> {
    let tie_break = args.tie_break.into();
    let outcome = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => solve_file(path, tie_break)?,
        _ => solve(&read_stdin()?, tie_break),
    };
    let rendered = render_outcome(&outcome, args.format)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write solver output")?;
    Ok(())
}

/// Solve `text` and render it in the requested format.
pub fn run_solve(text: &str, args: &SolveCommandArgs) -> Result<String> {
    render_outcome(&solve(text, args.tie_break.into()), args.format)
}

/// Load and solve a maze file. Unsolvable mazes become [`Outcome::NoPath`];
/// only I/O failures are errors.
pub fn solve_file(path: &Path, tie_break: GoalTieBreak) -> Result<Outcome> {
    match load_maze(path) {
        Ok(maze) => Ok(solve_maze(&maze, tie_break)),
        Err(err) if err.is_no_path() => {
            tracing::warn!("{err}");
            Ok(Outcome::NoPath)
        }
        Err(err) => Err(err).context("failed to load maze file"),
    }
}

fn render_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    if let Outcome::Found(plan) = outcome {
        tracing::debug!(
            cost = plan.cost,
            settled = plan.stats.settled,
            "solver finished"
        );
    }
    format.render(outcome)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read maze from stdin")?;
    Ok(text)
}
