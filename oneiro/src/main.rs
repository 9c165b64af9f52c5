use anyhow::Result;
use clap::{Parser, Subcommand};
use human_panic::setup_panic;
use oneiro::prelude::*;
use tracing::error;

/// oneiro
///
/// Oneiro reads free-text dream journal entries, classifies each dream,
/// scores its emotional tone, and rolls everything up into a human
/// readable report.
#[derive(Parser)]
#[clap(author, version = env!("ONEIRO_VERSION"), about)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze each dream in a journal and show the per-dream breakdown
    Analyze(AnalyzeArgs),
    /// Analyze a journal and generate the aggregate report
    Report(ReportArgs),
}

fn main() {
    setup_panic!();
    let opts = Cli::parse();

    opts.logging.configure_logging();
    let error_code = run_subcommand(&opts);

    std::process::exit(error_code);
}

fn run_subcommand(opts: &Cli) -> i32 {
    match handle_commands(&opts.command) {
        Ok(code) => code,
        Err(e) => {
            if e.downcast_ref::<JournalError>().is_some() {
                error!(target: "user", "Failed to load journal: {}", e);
                2
            } else {
                error!(target: "user", "Critical Error. {}", e);
                1
            }
        }
    }
}

fn handle_commands(command: &Command) -> Result<i32> {
    match command {
        Command::Analyze(args) => analyze_root(args),
        Command::Report(args) => report_root(args),
    }
}
