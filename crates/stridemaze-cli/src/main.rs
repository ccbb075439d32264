use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stridemaze_cli::commands::solve::{handle_solve_command, SolveCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest route through a stride maze")]
struct Cli {
    #[command(flatten)]
    solve: SolveCommandArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    handle_solve_command(&cli.solve)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Stdout carries the solver result; diagnostics go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
