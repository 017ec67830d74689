/*!
 * PasteFlow - Summarize a directory tree as a Markdown report
 *
 * This library walks a directory, collects the text files that survive the
 * exclusion rules and an optional selection, and renders statistics, the
 * directory layout and optionally the file contents as one Markdown document
 * meant to be pasted into an LLM prompt.
 */

pub mod aggregator;
pub mod clipboard;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod renderer;
pub mod summary;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::info;

// Re-export main components for easier access
pub use aggregator::analyze;
pub use collector::{Collection, FileCollector};
pub use config::Config;
pub use error::{PasteFlowError, Result};
pub use filter::{ExclusionSet, PathFilter, DEFAULT_EXCLUSIONS};
pub use renderer::ReportRenderer;
pub use types::{FileRecord, FileTypeCount, Statistics, Warning};
pub use utils::format_thousands;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output of a full analysis run
#[derive(Debug, Clone)]
pub struct Report {
    /// Rendered Markdown document
    pub markdown: String,
    /// Statistics the document was rendered from
    pub statistics: Statistics,
    /// Files skipped during collection
    pub warnings: Vec<Warning>,
}

/// Collect, analyze and render `root` in one call.
///
/// `selection` restricts which files are read; the directory structure always
/// lists the whole filtered tree.
pub fn generate_report(
    root: &Path,
    selection: Option<&[String]>,
    exclusions: ExclusionSet,
    show_content: bool,
) -> Result<Report> {
    let collector = FileCollector::new(exclusions);
    let collection = collector.collect(root, selection)?;
    let structure = collector.directory_structure(root)?;

    let statistics = analyze(&collection.files, &structure);
    let markdown = ReportRenderer::new(root).render(&statistics, show_content);

    info!(
        root = %root.display(),
        files = statistics.total_files,
        skipped = collection.warnings.len(),
        "Report generated"
    );

    Ok(Report {
        markdown,
        statistics,
        warnings: collection.warnings,
    })
}
