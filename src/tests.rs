/*!
 * End-to-end tests for PasteFlow functionality
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::tempdir;

use crate::collector::FileCollector;
use crate::filter::ExclusionSet;
use crate::renderer::ReportRenderer;
use crate::{analyze, generate_report, PasteFlowError, Warning};

// Helper function to create a test directory structure
fn setup_test_directory() -> io::Result<tempfile::TempDir> {
    let temp_dir = tempdir()?;

    fs::create_dir(temp_dir.path().join("dir1"))?;
    fs::create_dir(temp_dir.path().join("dir2"))?;
    fs::create_dir(temp_dir.path().join("dir1").join("subdir"))?;

    let mut file1 = File::create(temp_dir.path().join("file1.txt"))?;
    writeln!(file1, "This is a text file with content")?;

    let mut file2 = File::create(temp_dir.path().join("dir1").join("file2.py"))?;
    write!(file2, "print('hello')\nprint('world')")?;

    let mut file3 = File::create(
        temp_dir
            .path()
            .join("dir1")
            .join("subdir")
            .join("Makefile"),
    )?;
    writeln!(file3, "all:\n\techo nested")?;

    // Excluded by default tokens
    fs::create_dir(temp_dir.path().join(".git"))?;
    let mut git_file = File::create(temp_dir.path().join(".git").join("config"))?;
    writeln!(git_file, "[core]\n\trepositoryformatversion = 0")?;

    fs::create_dir_all(temp_dir.path().join("project").join("mydist"))?;
    let mut dist_file = File::create(
        temp_dir
            .path()
            .join("project")
            .join("mydist")
            .join("readme.txt"),
    )?;
    writeln!(dist_file, "should never be read")?;

    // Not valid UTF-8
    let mut bin_file = File::create(temp_dir.path().join("binary.bin"))?;
    bin_file.write_all(&[0xffu8, 0xfeu8, 0x00u8, 0xc3u8])?;

    Ok(temp_dir)
}

fn paths_of(root: &Path, selection: Option<&[String]>) -> Vec<String> {
    FileCollector::default()
        .collect(root, selection)
        .unwrap()
        .files
        .into_iter()
        .map(|f| f.path)
        .collect()
}

#[test]
fn test_collect_basic_tree() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;

    let collection = FileCollector::default().collect(temp_dir.path(), None)?;
    let paths: Vec<&str> = collection.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["dir1/file2.py", "dir1/subdir/Makefile", "file1.txt"]);

    let py = &collection.files[0];
    assert_eq!(py.file_type, "py");
    assert_eq!(py.line_count, 2);
    assert_eq!(py.char_count, 29);

    let makefile = &collection.files[1];
    assert_eq!(makefile.file_type, "no_ext");
    assert_eq!(makefile.line_count, 2);

    // The undecodable file is reported, not fatal
    assert_eq!(collection.warnings.len(), 1);
    assert_eq!(collection.warnings[0].path(), "binary.bin");
    assert!(matches!(
        collection.warnings[0],
        Warning::UnreadableFile { .. }
    ));

    Ok(())
}

#[test]
fn test_paths_unique_and_sorted() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    fs::write(temp_dir.path().join("a-file.txt"), "x")?;
    fs::write(temp_dir.path().join("dir1").join("a.txt"), "x")?;

    let paths = paths_of(temp_dir.path(), None);
    let mut sorted = paths.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(paths, sorted);

    Ok(())
}

#[test]
fn test_collect_is_idempotent() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let collector = FileCollector::default();

    let first = collector.collect(temp_dir.path(), None)?;
    let second = collector.collect(temp_dir.path(), None)?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_substring_exclusion_everywhere() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let collector = FileCollector::default();

    let paths = paths_of(temp_dir.path(), None);
    assert!(paths.iter().all(|p| !p.contains("mydist") && !p.contains(".git")));

    let structure = collector.directory_structure(temp_dir.path())?;
    assert!(!structure.contains("mydist"));
    assert!(!structure.contains(".git"));
    assert!(structure.contains("project/"));

    Ok(())
}

#[test]
fn test_custom_exclusions_replace_defaults() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let collector = FileCollector::new(ExclusionSet::new(["dir1", ".bin"]));

    let collection = collector.collect(temp_dir.path(), None)?;
    let paths: Vec<&str> = collection.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![".git/config", "file1.txt", "project/mydist/readme.txt"]
    );
    assert!(collection.warnings.is_empty());

    Ok(())
}

#[test]
fn test_selection_restricts_collection_only() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let selection = vec!["file1.txt".to_string(), "dir1/subdir/Makefile".to_string()];

    let paths = paths_of(temp_dir.path(), Some(selection.as_slice()));
    assert_eq!(paths, vec!["dir1/subdir/Makefile", "file1.txt"]);

    let structure = FileCollector::default().directory_structure(temp_dir.path())?;
    assert_eq!(
        structure,
        "binary.bin\ndir1/\n  file2.py\n  subdir/\n    Makefile\ndir2/\nfile1.txt\nproject/"
    );

    Ok(())
}

#[test]
fn test_selection_skips_unreadable_file_silently_when_unselected() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let selection = vec!["file1.txt".to_string()];

    let collection = FileCollector::default().collect(temp_dir.path(), Some(selection.as_slice()))?;
    assert_eq!(collection.files.len(), 1);
    assert!(collection.warnings.is_empty());

    Ok(())
}

#[test]
fn test_round_trip_report_contains_every_file() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let collector = FileCollector::default();

    let collection = collector.collect(temp_dir.path(), None)?;
    let structure = collector.directory_structure(temp_dir.path())?;
    let stats = analyze(&collection.files, &structure);
    let report = ReportRenderer::new(temp_dir.path()).render(&stats, true);

    for file in &stats.files {
        assert!(report.contains(&format!("\n### {}\n", file.path)));
        let block = format!(
            "```{}\n{}\n```",
            file.file_type,
            file.content.strip_suffix('\n').unwrap_or(&file.content)
        );
        assert!(report.contains(&block), "missing block for {}", file.path);
    }
    assert!(report.contains(&format!("Target folder: {}", temp_dir.path().display())));

    Ok(())
}

#[test]
fn test_generate_report_pipeline() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;

    let report = generate_report(temp_dir.path(), None, ExclusionSet::default(), false)?;
    assert_eq!(report.statistics.total_files, 3);
    assert_eq!(
        report.statistics.total_lines,
        report.statistics.files.iter().map(|f| f.line_count).sum::<usize>()
    );
    assert_eq!(report.warnings.len(), 1);
    assert!(report.markdown.contains("- Total files: 3\n"));
    assert!(!report.markdown.contains("## File Contents"));

    Ok(())
}

#[test]
fn test_empty_tree_renders_zero_report() -> io::Result<()> {
    let temp_dir = tempdir()?;

    let report = generate_report(temp_dir.path(), None, ExclusionSet::default(), true)?;
    assert_eq!(report.statistics.total_files, 0);
    assert!(report.statistics.file_type_counts.is_empty());
    assert!(report.statistics.largest_files.is_empty());
    assert!(report.markdown.contains("- Total files: 0\n"));
    assert!(report.markdown.contains("## Directory Structure\n```\n\n```\n"));

    Ok(())
}

#[test]
fn test_empty_selection_renders_zero_report() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let selection: Vec<String> = Vec::new();

    let report = generate_report(
        temp_dir.path(),
        Some(selection.as_slice()),
        ExclusionSet::default(),
        true,
    )?;
    assert_eq!(report.statistics.total_files, 0);
    assert!(report.markdown.contains("file1.txt"));

    Ok(())
}

#[test]
fn test_inaccessible_root() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = generate_report(&missing, None, ExclusionSet::default(), true).unwrap_err();
    assert!(matches!(err, PasteFlowError::InaccessibleRoot { .. }));
}
