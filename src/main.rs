//! CLI entry point for the cookie checker.

use std::fs;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use cookie_checker::CookieChecker;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let checker = CookieChecker::new(&args.url, Duration::from_secs(args.timeout))?;

    // Console sink: echo every report line and keep the transcript for --log.
    let mut transcript: Vec<String> = Vec::new();
    let mut sink = |line: &str| {
        println!("{line}");
        transcript.push(line.to_string());
    };

    let summary = checker.run(&args.directory, &mut sink).await?;

    info!(
        total = summary.total_checked,
        working = summary.working,
        "run complete"
    );

    if args.log {
        let log_path = write_transcript(&args, &transcript)?;
        info!(path = %log_path, "transcript written");
    }

    Ok(())
}

/// Writes the run transcript under `<directory>/checker_logs/`, returning the
/// log file path.
fn write_transcript(args: &Args, transcript: &[String]) -> Result<String> {
    let log_dir = args.directory.join("checker_logs");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let log_path = log_dir.join(format!("checker_log_{stamp}.txt"));

    let mut contents = transcript.join("\n");
    contents.push('\n');
    fs::write(&log_path, contents)
        .with_context(|| format!("failed to write transcript to {}", log_path.display()))?;

    Ok(log_path.display().to_string())
}
