/*!
 * Core types and data structures for the pasteflow application
 */

use std::fmt;

/// Marker used as the file type of files without an extension
pub const NO_EXTENSION: &str = "no_ext";

/// A text file collected from the analysis root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileRecord {
    /// POSIX-style path relative to the analysis root
    pub path: String,
    /// Full decoded text of the file
    pub content: String,
    /// Number of characters (not bytes) in `content`
    pub char_count: usize,
    /// Number of lines in `content`; an unterminated last line still counts
    pub line_count: usize,
    /// Extension as found on disk, or [`NO_EXTENSION`]
    pub file_type: String,
}

impl FileRecord {
    /// Build a record from a relative path and the decoded file content
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            path: path.into(),
            char_count: content.chars().count(),
            line_count: content.lines().count(),
            content,
            file_type: file_type.into(),
        }
    }
}

/// Number of files sharing one file type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeCount {
    /// Extension or [`NO_EXTENSION`]
    pub file_type: String,
    /// Number of files with this type
    pub count: usize,
}

/// Aggregate statistics for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of included files
    pub total_files: usize,
    /// Sum of `char_count` over included files
    pub total_chars: usize,
    /// Sum of `line_count` over included files
    pub total_lines: usize,
    /// Per-type counts, in first-encountered order
    pub file_type_counts: Vec<FileTypeCount>,
    /// Up to five largest files by character count, descending
    pub largest_files: Vec<FileRecord>,
    /// Preformatted directory listing
    pub directory_structure: String,
    /// All included files, sorted by path
    pub files: Vec<FileRecord>,
}

impl Statistics {
    /// Per-type counts ordered by descending count, ties in first-encountered order
    pub fn file_types_by_count(&self) -> Vec<&FileTypeCount> {
        let mut counts: Vec<&FileTypeCount> = self.file_type_counts.iter().collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

/// A non-fatal problem encountered while collecting files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A candidate file could not be opened or decoded as UTF-8
    UnreadableFile {
        /// Path relative to the root
        path: String,
        /// Why the file was skipped
        reason: String,
    },
    /// A directory entry could not be inspected during traversal
    TraversalError {
        /// Path of the entry, if known
        path: String,
        /// Underlying error message
        reason: String,
    },
}

impl Warning {
    /// Path the warning refers to
    pub fn path(&self) -> &str {
        match self {
            Self::UnreadableFile { path, .. } | Self::TraversalError { path, .. } => path,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreadableFile { path, reason } => write!(f, "skipped file {}: {}", path, reason),
            Self::TraversalError { path, reason } => write!(f, "could not read {}: {}", path, reason),
        }
    }
}
