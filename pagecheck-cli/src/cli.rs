use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use pagecheck::{DEFAULT_PAGE_PATH, Expectations, SourceConfig, check_file, output};
use tracing::info;

use crate::exit_codes;
use crate::logging;

#[derive(Parser)]
#[command(
    name = "pagecheck",
    version,
    about = "Check a static HTML page against its structure and content checklist"
)]
struct Cli {
    /// HTML file to check.
    #[arg(default_value = DEFAULT_PAGE_PATH)]
    path: PathBuf,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Parse arguments, run the checklist and print the report.
///
/// Returns the process exit code for a completed run; a load or parse failure
/// is returned as an error.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let source_config = SourceConfig::for_path(&cli.path);
    let report = check_file(&source_config, &Expectations::default())?;
    info!(
        file = %report.file.display(),
        passed = report.passed_count(),
        failed = report.failed_count(),
        "checklist finished"
    );

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(if report.ok {
        exit_codes::OK
    } else {
        exit_codes::FAILED
    })
}
