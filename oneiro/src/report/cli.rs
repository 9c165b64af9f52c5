use crate::analyze::prelude::DreamAnalyzer;
use crate::shared::prelude::{load_journal, JOURNAL_PATH_ENV};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Path to the journal to analyze, a `.yaml`, `.yml` or `.json` file
    /// holding a list of entries. Defaults to the built-in sample journal.
    #[arg(long, short = 'j', env = JOURNAL_PATH_ENV)]
    journal: Option<String>,

    /// Write the report to this file instead of printing it.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

pub fn report_root(args: &ReportArgs) -> Result<i32> {
    let entries = load_journal(args.journal.as_deref())?;
    info!(target: "user", "Analyzing {} dream entries", entries.len());

    let analyzer = DreamAnalyzer::default();
    let report = analyzer.generate_report(&entries)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &report)?;
            info!(target: "always", "Report was created at {}", path.display());
        }
        None => println!("{}", report),
    }

    Ok(0)
}
