/*!
 * Utility functions for pasteflow
 */

use std::fs;
use std::path::{Component, Path};

use crate::error::Result;
use crate::types::NO_EXTENSION;

/// Format a number with comma thousands separators
pub fn format_thousands(num: usize) -> String {
    let digits = num.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Render a relative path with `/` separators regardless of platform
pub fn to_posix_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Extension of a file name without the dot, case preserved, or `no_ext`
pub fn file_type_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_string(),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Parse a selection list: one relative path per line, `#` starts a comment
pub fn parse_selection(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.replace('\\', "/"))
        .collect()
}

/// Read a selection list file
pub fn read_selection_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_selection(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(123456), "123,456");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_to_posix_path() {
        let path: PathBuf = ["src", "core", "lib.rs"].iter().collect();
        assert_eq!(to_posix_path(&path), "src/core/lib.rs");
        assert_eq!(to_posix_path(Path::new("a.txt")), "a.txt");
    }

    #[test]
    fn test_file_type_of() {
        assert_eq!(file_type_of(Path::new("main.rs")), "rs");
        assert_eq!(file_type_of(Path::new("README.MD")), "MD");
        assert_eq!(file_type_of(Path::new("archive.tar.gz")), "gz");
        assert_eq!(file_type_of(Path::new("Makefile")), "no_ext");
        assert_eq!(file_type_of(Path::new(".bashrc")), "no_ext");
        assert_eq!(file_type_of(Path::new("trailing.")), "no_ext");
    }

    #[test]
    fn test_parse_selection() {
        let text = "# chosen files\nsrc/main.rs\n\n  docs\\guide.md  \n";
        assert_eq!(parse_selection(text), vec!["src/main.rs", "docs/guide.md"]);
    }
}
