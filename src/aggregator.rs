/*!
 * Aggregate statistics over collected files
 */

use std::collections::HashMap;

use tracing::debug;

use crate::types::{FileRecord, FileTypeCount, Statistics};

/// Number of entries kept in [`Statistics::largest_files`]
pub const LARGEST_FILES_LIMIT: usize = 5;

/// Compute totals, per-type counts and the largest files.
///
/// `files` is expected in path order; ties in size keep that order.
pub fn analyze(files: &[FileRecord], directory_structure: &str) -> Statistics {
    let mut file_type_counts: Vec<FileTypeCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for file in files {
        match positions.get(file.file_type.as_str()) {
            Some(&pos) => file_type_counts[pos].count += 1,
            None => {
                positions.insert(file.file_type.as_str(), file_type_counts.len());
                file_type_counts.push(FileTypeCount {
                    file_type: file.file_type.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so equal sizes keep their path order
    let mut by_size: Vec<&FileRecord> = files.iter().collect();
    by_size.sort_by(|a, b| b.char_count.cmp(&a.char_count));
    let largest_files: Vec<FileRecord> = by_size
        .into_iter()
        .take(LARGEST_FILES_LIMIT)
        .cloned()
        .collect();

    let stats = Statistics {
        total_files: files.len(),
        total_chars: files.iter().map(|f| f.char_count).sum(),
        total_lines: files.iter().map(|f| f.line_count).sum(),
        file_type_counts,
        largest_files,
        directory_structure: directory_structure.to_string(),
        files: files.to_vec(),
    };

    debug!(
        files = stats.total_files,
        chars = stats.total_chars,
        lines = stats.total_lines,
        file_types = stats.file_type_counts.len(),
        "Analyzed files"
    );

    stats
}
