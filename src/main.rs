use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use spanfix::{error::Result, runner};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to rewrite in place, processed in the order given
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let summary = runner::run(&args.paths)?;

    // Missing files were already reported per path; they do not fail the run.
    info!(
        "All files processed ({} rewritten, {} missing, {} spans collapsed)",
        summary.processed, summary.missing, summary.replaced
    );

    Ok(())
}
