/*!
 * Command-line interface for PasteFlow
 */

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use clap::{CommandFactory, Parser};
use tracing::{info, Level};

use pasteflow::clipboard::copy_to_clipboard;
use pasteflow::config::{Args, Config, Destination};
use pasteflow::summary::{RunSummary, SummaryPrinter};
use pasteflow::{generate_report, FileCollector, ReportRenderer};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "pasteflow", &mut io::stdout());
        return Ok(());
    }

    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    if config.list_only {
        let collector = FileCollector::new(config.exclusions.clone());
        let mut stdout = io::stdout().lock();
        for path in collector.candidate_paths(&config.target_dir)? {
            writeln!(stdout, "{}", path)?;
        }
        return Ok(());
    }

    let selection = config.selection()?;
    info!(
        root = %config.target_dir.display(),
        selected = selection.as_ref().map(Vec::len),
        "Analyzing directory"
    );

    let start_time = Instant::now();
    let report = generate_report(
        &config.target_dir,
        selection.as_deref(),
        config.exclusions.clone(),
        config.show_content,
    )?;

    match &config.destination {
        Destination::Stdout => io::stdout().lock().write_all(report.markdown.as_bytes())?,
        Destination::File(path) => fs::write(path, &report.markdown)?,
        Destination::Clipboard => copy_to_clipboard(&report.markdown)
            .map_err(pasteflow::PasteFlowError::from)?,
    }
    let duration = start_time.elapsed();

    if !config.quiet {
        let root = ReportRenderer::new(&config.target_dir)
            .root()
            .display()
            .to_string();
        SummaryPrinter::new().print(&RunSummary {
            root,
            destination: &config.destination,
            duration,
            statistics: &report.statistics,
            warnings: &report.warnings,
        });
    }

    Ok(())
}
