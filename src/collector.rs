/*!
 * Directory traversal and file collection
 */

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{PasteFlowError, Result};
use crate::filter::{ExclusionSet, PathFilter};
use crate::types::{FileRecord, Warning};
use crate::utils::{file_type_of, to_posix_path};

/// Files collected from one traversal, plus the files that had to be skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Collected files, sorted by path
    pub files: Vec<FileRecord>,
    /// Non-fatal problems, in traversal order
    pub warnings: Vec<Warning>,
}

/// Walks an analysis root and turns surviving files into [`FileRecord`]s
#[derive(Debug, Clone, Default)]
pub struct FileCollector {
    filter: PathFilter,
}

impl FileCollector {
    /// Create a collector excluding the given tokens
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self::with_filter(PathFilter::new(exclusions))
    }

    /// Create a collector from an existing filter
    pub fn with_filter(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Collect every non-excluded text file under `root`.
    ///
    /// When `selected` is given, only files whose relative path is in it are
    /// read. An empty selection yields an empty collection.
    pub fn collect(&self, root: &Path, selected: Option<&[String]>) -> Result<Collection> {
        check_root(root)?;

        let selection: Option<HashSet<&str>> =
            selected.map(|paths| paths.iter().map(String::as_str).collect());
        let mut collection = Collection::default();

        for entry in self.walk(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    collection.warnings.push(traversal_warning(root, &e));
                    continue;
                }
            };

            if !entry.path().is_file() {
                continue;
            }

            let Some(rel_path) = relative_path(root, &entry) else {
                continue;
            };

            if let Some(selection) = &selection {
                if !selection.contains(rel_path.as_str()) {
                    continue;
                }
            }

            match read_text(entry.path()) {
                Ok(content) => {
                    let file_type = file_type_of(entry.path());
                    collection
                        .files
                        .push(FileRecord::new(rel_path, content, file_type));
                }
                Err(reason) => {
                    warn!(path = %rel_path, %reason, "Skipping unreadable file");
                    collection.warnings.push(Warning::UnreadableFile {
                        path: rel_path,
                        reason,
                    });
                }
            }
        }

        collection.files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(
            root = %root.display(),
            files = collection.files.len(),
            skipped = collection.warnings.len(),
            "Collected files"
        );

        Ok(collection)
    }

    /// Relative paths of every file that could be selected for analysis, sorted
    pub fn candidate_paths(&self, root: &Path) -> Result<Vec<String>> {
        check_root(root)?;

        let mut paths: Vec<String> = self
            .walk(root)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| relative_path(root, &entry))
            .collect();
        paths.sort();

        Ok(paths)
    }

    /// Indented listing of the whole filtered tree.
    ///
    /// Two spaces of indentation per depth level, directories end with `/`.
    /// The listing ignores any selection.
    pub fn directory_structure(&self, root: &Path) -> Result<String> {
        check_root(root)?;

        let mut lines = Vec::new();
        for entry in self.walk(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    traversal_warning(root, &e);
                    continue;
                }
            };

            let indent = "  ".repeat(entry.depth().saturating_sub(1));
            let name = entry.file_name().to_string_lossy();
            if entry.path().is_dir() {
                lines.push(format!("{}{}/", indent, name));
            } else {
                lines.push(format!("{}{}", indent, name));
            }
        }

        Ok(lines.join("\n"))
    }

    /// Depth-first walk below `root`, siblings in name order, excluded
    /// directories are not entered
    fn walk<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
        WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            // Tokens are matched against the root-relative path, so the
            // root's own location (e.g. under `~/build/`) never excludes the tree
            .filter_entry(move |entry| match relative_path(root, entry) {
                Some(rel_path) => !self.filter.is_excluded(&rel_path),
                None => false,
            })
    }
}

/// Fail unless `root` is a listable directory
fn check_root(root: &Path) -> Result<()> {
    let metadata =
        fs::metadata(root).map_err(|e| PasteFlowError::inaccessible_root(root, e))?;
    if !metadata.is_dir() {
        return Err(PasteFlowError::inaccessible_root(
            root,
            std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        ));
    }
    fs::read_dir(root).map_err(|e| PasteFlowError::inaccessible_root(root, e))?;
    Ok(())
}

fn relative_path(root: &Path, entry: &DirEntry) -> Option<String> {
    entry
        .path()
        .strip_prefix(root)
        .ok()
        .map(to_posix_path)
}

/// Read a whole file as UTF-8, describing the failure on error
fn read_text(path: &Path) -> std::result::Result<String, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    let text =
        String::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {}", e.utf8_error()))?;
    Ok(normalize_newlines(text))
}

/// Turn `\r\n` and lone `\r` into `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn traversal_warning(root: &Path, err: &walkdir::Error) -> Warning {
    let path = err
        .path()
        .map(|p| match p.strip_prefix(root) {
            Ok(rel) => to_posix_path(rel),
            Err(_) => p.display().to_string(),
        })
        .unwrap_or_default();
    warn!(%path, error = %err, "Failed to read directory entry");
    Warning::TraversalError {
        path,
        reason: err.to_string(),
    }
}
