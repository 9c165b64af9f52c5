use crate::analyze::prelude::{DreamAnalysis, DreamAnalyzer, DreamType, EmotionCategory};
use crate::models::prelude::DreamEntry;
use anyhow::Result;
use chrono::Local;
use itertools::Itertools;
use minijinja::{context, Environment};
use serde::Serialize;
use std::collections::BTreeMap;

mod cli;

pub mod prelude {
    pub use crate::report::cli::{report_root, ReportArgs};
    pub use crate::report::{DreamReportBuilder, EMPTY_JOURNAL_MESSAGE};
}

/// Returned when there is nothing to analyze.
pub const EMPTY_JOURNAL_MESSAGE: &str = "No dreams to analyze.";

const DREAM_REPORT_TEMPLATE: &str = r#"# 🌙 Dream Analysis Report

## 📊 Overall Statistics

- **Dreams analyzed:** {{ total }}
- **Average positivity score:** {{ averagePositivity }}/100

## 🎭 Dream Types

{% for type in types -%}
- **{{ type.name | title }}:** {{ type.count }} dreams ({{ type.percentage }}%)
{% endfor %}
## 💭 Dominant Emotions

{% for emotion in emotions -%}
- **{{ emotion.name | title }}:** {{ emotion.total }} occurrences
{% endfor %}
## 🔮 Generated at {{ generatedAt }}
"#;

impl DreamAnalyzer {
    /// Analyze every entry, in input order, and render the aggregate report.
    pub fn generate_report(&self, entries: &[DreamEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok(EMPTY_JOURNAL_MESSAGE.to_string());
        }

        let mut builder = DreamReportBuilder::default();
        for entry in entries {
            builder.append_analysis(&self.analyze(&entry.content));
        }

        builder.render()
    }
}

/// Folds per-dream analyses into the aggregate the report is rendered from.
/// Nothing is persisted; a builder lives for one report.
#[derive(Debug, Default)]
pub struct DreamReportBuilder {
    total: usize,
    // first-encounter order, which is also the order the report lists types in
    type_counts: Vec<(DreamType, usize)>,
    emotion_totals: BTreeMap<EmotionCategory, usize>,
    positivity_sum: u64,
}

impl DreamReportBuilder {
    pub fn append_analysis(&mut self, analysis: &DreamAnalysis) {
        self.total += 1;
        self.positivity_sum += u64::from(analysis.positivity_score);

        match self
            .type_counts
            .iter_mut()
            .find(|(dream_type, _)| *dream_type == analysis.dream_type)
        {
            Some((_, count)) => *count += 1,
            None => self.type_counts.push((analysis.dream_type, 1)),
        }

        for (category, score) in &analysis.emotions {
            *self.emotion_totals.entry(*category).or_default() += score;
        }
    }

    pub fn render(&self) -> Result<String> {
        if self.total == 0 {
            return Ok(EMPTY_JOURNAL_MESSAGE.to_string());
        }

        let types = self
            .type_counts
            .iter()
            .map(|(dream_type, count)| ReportTypeContext {
                name: dream_type.to_string(),
                count: *count,
                percentage: format!("{:.1}", *count as f64 / self.total as f64 * 100.0),
            })
            .collect_vec();

        // descending by total, ties keep category order (the sort is stable)
        let emotions = self
            .emotion_totals
            .iter()
            .sorted_by(|left, right| right.1.cmp(left.1))
            .map(|(category, total)| ReportEmotionContext {
                name: category.to_string(),
                total: *total,
            })
            .collect_vec();

        let average_positivity = self.positivity_sum as f64 / self.total as f64;

        let mut env = Environment::new();
        env.add_template("dream-report", DREAM_REPORT_TEMPLATE)?;
        let rendered = env.get_template("dream-report")?.render(context! {
            total => self.total,
            averagePositivity => format!("{:.1}", average_positivity),
            types => types,
            emotions => emotions,
            generatedAt => Local::now().format("%d/%m/%Y %H:%M").to_string(),
        })?;

        Ok(rendered)
    }
}

#[derive(Serialize, Debug)]
struct ReportTypeContext {
    name: String,
    count: usize,
    percentage: String,
}

#[derive(Serialize, Debug)]
struct ReportEmotionContext {
    name: String,
    total: usize,
}
