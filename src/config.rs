/*!
 * Configuration handling for PasteFlow
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::filter::ExclusionSet;
use crate::utils::read_selection_file;
use crate::{bail, ensure};

/// Command-line arguments for PasteFlow
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "pasteflow",
    version = crate::VERSION,
    about = "Summarize a directory as a Markdown report for LLM prompts",
    long_about = "Walks a directory, collects text files, and renders file statistics, the directory tree and optionally every file's content as a single Markdown report."
)]
pub struct Args {
    /// Target directory to analyze
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Comma-separated list of relative file paths to analyze (default: all files)
    #[clap(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// File listing relative paths to analyze, one per line
    #[clap(long, value_name = "FILE")]
    pub select_from: Option<String>,

    /// Leave file contents out of the report
    #[clap(long)]
    pub no_content: bool,

    /// Comma-separated list of extra exclusion substrings
    #[clap(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Do not apply the built-in exclusion substrings
    #[clap(long)]
    pub no_default_excludes: bool,

    /// Write the report to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<String>,

    /// Copy the report to the system clipboard instead of stdout
    #[clap(long, conflicts_with = "output")]
    pub clip: bool,

    /// Print the selectable file paths and exit
    #[clap(long)]
    pub list: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Log debug information to stderr
    #[clap(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors, and skip the run summary
    #[clap(short, long)]
    pub quiet: bool,
}

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Stdout,
    /// A file on disk
    File(PathBuf),
    /// The system clipboard
    Clipboard,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to analyze
    pub target_dir: PathBuf,

    /// Paths given with --select
    pub selected: Vec<String>,

    /// Selection list file given with --select-from
    pub selection_file: Option<PathBuf>,

    /// Whether file bodies are embedded in the report
    pub show_content: bool,

    /// Exclusion substrings applied during traversal
    pub exclusions: ExclusionSet,

    /// Where the report is delivered
    pub destination: Destination,

    /// Only list selectable files
    pub list_only: bool,

    /// Suppress the run summary
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let base = if args.no_default_excludes {
            ExclusionSet::empty()
        } else {
            ExclusionSet::default()
        };

        let destination = match (args.output, args.clip) {
            (Some(path), _) => Destination::File(PathBuf::from(path)),
            (None, true) => Destination::Clipboard,
            (None, false) => Destination::Stdout,
        };

        Self {
            target_dir: PathBuf::from(args.directory_path),
            selected: args.select,
            selection_file: args.select_from.map(PathBuf::from),
            show_content: !args.no_content,
            exclusions: base.with_extra(args.exclude),
            destination,
            list_only: args.list,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        if let Destination::File(output) = &self.destination {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    bail!(Config, "Output directory not found: {}", parent.display());
                }
            }
        }

        if let Some(path) = &self.selection_file {
            ensure!(
                path.is_file(),
                Config,
                "Selection file not found: {}",
                path.display()
            );
        }

        Ok(())
    }

    /// Combined selection from --select and --select-from.
    ///
    /// `None` means every file is analyzed.
    pub fn selection(&self) -> Result<Option<Vec<String>>> {
        if self.selected.is_empty() && self.selection_file.is_none() {
            return Ok(None);
        }

        let mut selection = self.selected.clone();
        if let Some(path) = &self.selection_file {
            selection.extend(read_selection_file(path)?);
        }
        Ok(Some(selection))
    }
}
