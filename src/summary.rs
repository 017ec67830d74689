/*!
 * Console run summary for PasteFlow
 *
 * Printed to stderr after a CLI run so stdout stays reserved for the report.
 * Uses the tabled library for table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::Destination;
use crate::types::{Statistics, Warning};
use crate::utils::format_thousands;

/// Everything the summary needs to know about one run
#[derive(Debug, Clone)]
pub struct RunSummary<'a> {
    /// Analysis root as shown in the report header
    pub root: String,
    /// Where the report was delivered
    pub destination: &'a Destination,
    /// Time spent collecting, analyzing and rendering
    pub duration: Duration,
    /// Statistics of the run
    pub statistics: &'a Statistics,
    /// Files skipped during collection
    pub warnings: &'a [Warning],
}

/// Renders a [`RunSummary`] as console tables
#[derive(Debug, Default)]
pub struct SummaryPrinter;

impl SummaryPrinter {
    /// Create a new printer
    pub fn new() -> Self {
        Self
    }

    /// Build the summary text
    pub fn render(&self, summary: &RunSummary<'_>) -> String {
        let mut sections = Vec::new();

        if !summary.statistics.largest_files.is_empty() {
            sections.push(format!(
                "📋  LARGEST FILES\n{}",
                self.create_files_table(summary.statistics)
            ));
        }

        if !summary.warnings.is_empty() {
            sections.push(format!(
                "⚠️  SKIPPED FILES\n{}",
                self.create_warnings_table(summary.warnings)
            ));
        }

        sections.push(format!(
            "✅  ANALYSIS COMPLETE\n{}",
            self.create_summary_table(summary)
        ));

        sections.join("\n\n")
    }

    /// Print the summary to stderr
    pub fn print(&self, summary: &RunSummary<'_>) {
        eprintln!("\n{}", self.render(summary));
    }

    fn create_summary_table(&self, summary: &RunSummary<'_>) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = summary.statistics;
        let rows = vec![
            SummaryRow {
                key: "📂 Root",
                value: summary.root.clone(),
            },
            SummaryRow {
                key: "📤 Destination",
                value: summary.destination.to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "📄 Files",
                value: format_thousands(stats.total_files),
            },
            SummaryRow {
                key: "🔤 Characters",
                value: format_thousands(stats.total_chars),
            },
            SummaryRow {
                key: "📝 Lines",
                value: format_thousands(stats.total_lines),
            },
            SummaryRow {
                key: "🚫 Skipped",
                value: format_thousands(summary.warnings.len()),
            },
        ];

        styled(Table::new(rows))
    }

    fn create_files_table(&self, stats: &Statistics) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Characters")]
            chars: String,

            #[tabled(rename = "Lines")]
            lines: String,
        }

        let rows: Vec<FileRow> = stats
            .largest_files
            .iter()
            .map(|file| FileRow {
                path: file.path.clone(),
                chars: format_thousands(file.char_count),
                lines: format_thousands(file.line_count),
            })
            .collect();

        styled(Table::new(rows))
    }

    fn create_warnings_table(&self, warnings: &[Warning]) -> String {
        #[derive(Tabled)]
        struct WarningRow {
            #[tabled(rename = "Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<WarningRow> = warnings
            .iter()
            .map(|warning| match warning {
                Warning::UnreadableFile { path, reason }
                | Warning::TraversalError { path, reason } => WarningRow {
                    path: path.clone(),
                    reason: reason.clone(),
                },
            })
            .collect();

        styled(Table::new(rows))
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}
