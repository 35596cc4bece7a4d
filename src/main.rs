//! CLI entry point for canopy

use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;

use canopy::{CanopyError, count_nodes, gather, print_report, write_json};
use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Snapshot a directory tree as deterministic JSON")]
#[command(version)]
struct Args {
    /// Path to the folder to scan
    source: PathBuf,

    /// Path where the JSON file will be saved
    output: PathBuf,
}

/// Determine whether the report should use color based on the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // Respect FORCE_COLOR environment variable
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    // Respect TERM=dumb
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Mirror every log line to stdout and to the log file sitting next to the
/// JSON output.
fn init_logging(log_path: &Path) -> std::io::Result<()> {
    let log_file = File::create(log_path)?;
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(Arc::new(log_file)))
        .init();
    Ok(())
}

fn run(args: &Args) -> Result<(), CanopyError> {
    let start = Instant::now();

    info!("Scanning directory: {}", args.source.display());
    let scan = gather(&args.source)?;
    for warning in &scan.warnings {
        warn!("{}", warning.message);
    }

    info!("Saving tree structure to: {}", args.output.display());
    write_json(&scan.tree, &args.output)?;
    info!("Tree structure saved successfully");

    let (files, folders) = count_nodes(&scan.tree.root);
    print_report(
        &args.source,
        &args.output,
        files,
        folders,
        should_use_color(),
    )
    .map_err(|source| CanopyError::Report { source })?;

    info!(
        "Completed successfully in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();

    // The log lands next to the output JSON: same stem, .log suffix.
    let log_path = args.output.with_extension("log");
    if let Err(e) = init_logging(&log_path) {
        eprintln!(
            "canopy: cannot open log file '{}': {}",
            log_path.display(),
            e
        );
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        match e {
            CanopyError::NotFound { .. } | CanopyError::NotADirectory { .. } => {
                error!("Invalid input: {e}")
            }
            CanopyError::PermissionDenied { .. } | CanopyError::Io { .. } => {
                error!("OS error: {e}")
            }
            _ => error!("Unexpected error: {e}"),
        }
        process::exit(1);
    }
}
