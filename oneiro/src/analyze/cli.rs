use crate::analyze::{DreamAnalysis, DreamAnalyzer};
use crate::models::prelude::DreamEntry;
use crate::shared::prelude::{load_journal, JOURNAL_PATH_ENV};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use itertools::Itertools;
use tracing::info;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to the journal to analyze, a `.yaml`, `.yml` or `.json` file
    /// holding a list of entries. Defaults to the built-in sample journal.
    #[arg(long, short = 'j', env = JOURNAL_PATH_ENV)]
    journal: Option<String>,
}

pub fn analyze_root(args: &AnalyzeArgs) -> Result<i32> {
    let entries = load_journal(args.journal.as_deref())?;
    info!(target: "user", "Analyzing {} dream entries", entries.len());

    let analyzer = DreamAnalyzer::default();
    for (position, entry) in entries.iter().enumerate() {
        let analysis = analyzer.analyze(&entry.content);
        print_analysis(position + 1, entry, &analysis);
    }

    Ok(0)
}

fn print_analysis(position: usize, entry: &DreamEntry, analysis: &DreamAnalysis) {
    let header = match &entry.date {
        Some(date) => format!("Dream {} ({})", position, date),
        None => format!("Dream {}", position),
    };
    info!(target: "always", "{}", header.white().bold());
    info!(target: "always", "  Type: {}", analysis.dream_type);
    info!(target: "always", "  Positivity: {}/100", analysis.positivity_score);
    info!(target: "always", "  Words: {}", analysis.word_count);

    if !analysis.emotions.is_empty() {
        let emotions = analysis
            .emotions
            .iter()
            .map(|(category, score)| format!("{} ({})", category, score))
            .join(", ");
        info!(target: "always", "  Emotions: {}", emotions);
    }

    if !analysis.keywords.is_empty() {
        let keywords = analysis
            .keywords
            .iter()
            .map(|keyword| format!("{} x{}", keyword.word, keyword.count))
            .join(", ");
        info!(target: "always", "  Keywords: {}", keywords);
    }
}
