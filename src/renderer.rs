/*!
 * Markdown report rendering
 *
 * Sections are always emitted in the same order, even when empty, so the
 * output of two runs over the same tree differs only in the timestamp.
 */

use std::env;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};

use crate::types::{FileRecord, Statistics};
use crate::utils::format_thousands;

/// Timestamp format used in the report header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders [`Statistics`] as a Markdown document
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    /// Absolute analysis root shown in the header
    root: PathBuf,
}

impl ReportRenderer {
    /// Create a renderer for the given analysis root
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let joined = if root.is_absolute() {
            root.to_path_buf()
        } else {
            env::current_dir()
                .map(|cwd| cwd.join(root))
                .unwrap_or_else(|_| root.to_path_buf())
        };
        let root = joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        Self { root }
    }

    /// Absolute root shown in the header
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render the report stamped with the current local time
    pub fn render(&self, stats: &Statistics, show_content: bool) -> String {
        self.render_at(stats, show_content, Local::now())
    }

    /// Render the report stamped with `generated_at`
    pub fn render_at(
        &self,
        stats: &Statistics,
        show_content: bool,
        generated_at: DateTime<Local>,
    ) -> String {
        let mut lines: Vec<String> = vec![
            "# Folder Analysis Report".to_string(),
            String::new(),
            format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)),
            format!("Target folder: {}", self.root.display()),
            String::new(),
            "## Basic Information".to_string(),
            format!("- Total files: {}", format_thousands(stats.total_files)),
            format!("- Total characters: {}", format_thousands(stats.total_chars)),
            format!("- Total lines: {}", format_thousands(stats.total_lines)),
            String::new(),
            "## File Type Statistics".to_string(),
        ];

        for type_count in stats.file_types_by_count() {
            lines.push(format!(
                "- {}: {} files",
                type_count.file_type,
                format_thousands(type_count.count)
            ));
        }

        lines.push(String::new());
        lines.push("## Largest Files (by character count)".to_string());
        for file in &stats.largest_files {
            lines.push(format!(
                "- {}: {} chars ({} lines)",
                file.path,
                format_thousands(file.char_count),
                format_thousands(file.line_count)
            ));
        }

        lines.push(String::new());
        lines.push("## Directory Structure".to_string());
        push_fenced(&mut lines, "", &stats.directory_structure);

        if show_content {
            lines.push(String::new());
            lines.push("## File Contents".to_string());
            for file in &stats.files {
                push_file_section(&mut lines, file);
            }
        }

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }
}

fn push_file_section(lines: &mut Vec<String>, file: &FileRecord) {
    lines.push(String::new());
    lines.push(format!("### {}", file.path));
    lines.push(format!("- Characters: {}", format_thousands(file.char_count)));
    lines.push(format!("- Lines: {}", format_thousands(file.line_count)));
    push_fenced(lines, &file.file_type, &file.content);
}

/// Append `body` verbatim inside a code fence tagged with `lang`
fn push_fenced(lines: &mut Vec<String>, lang: &str, body: &str) {
    let fence = fence_for(body);
    lines.push(format!("{}{}", fence, lang));
    lines.push(body.strip_suffix('\n').unwrap_or(body).to_string());
    lines.push(fence);
}

/// Backtick fence longer than any backtick run inside `body`
fn fence_for(body: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in body.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}
