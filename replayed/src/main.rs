//! replayed - listening statistics from a Spotify streaming-history export
//!
//! Loads one or more history JSON files, folds them into ranked frequency
//! tables, writes the top-stats report, and prints the temporal and
//! geographic summaries.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use replayed_core::analytics::{artist_discography, ListeningSummary, SummaryOptions};
use replayed_core::{ingest, report, Config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "replayed")]
#[command(about = "Listening statistics from your streaming history")]
#[command(version)]
struct Args {
    /// History files to load, in order (JSON arrays of play events)
    files: Vec<PathBuf>,

    /// Directory to scan for history files (*.json, sorted by name)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Restrict the history to one calendar year
    #[arg(long, conflicts_with = "this_year")]
    year: Option<i32>,

    /// Restrict the history to the current calendar year
    #[arg(long)]
    this_year: bool,

    /// Where to write the top-stats report
    #[arg(long, default_value = "spotify_top_stats.txt")]
    output: PathBuf,

    /// Also write a full discography report for this artist
    #[arg(long)]
    artist: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = replayed_core::logging::init(&config.logging).ok();

    // Gather input paths: positional files first, then discovered ones
    let mut paths = args.files.clone();
    if let Some(dir) = &args.dir {
        let discovered = ingest::discover_history_files(dir)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        paths.extend(discovered);
    }
    if paths.is_empty() {
        anyhow::bail!("no history files given; pass files or --dir");
    }

    let events = ingest::load_history(&paths).context("failed to load streaming history")?;
    tracing::info!(files = paths.len(), events = events.len(), "History loaded");

    let year = if args.this_year {
        Some(Utc::now().year())
    } else {
        args.year
    };

    let summary = ListeningSummary::generate(&events, &SummaryOptions { year });

    // Top-stats report file
    let text = report::render_top_stats(&summary, &config.report);
    std::fs::write(&args.output, text)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!(
        "Wrote top stats for {} plays to {}",
        summary.event_count,
        args.output.display()
    );

    // Per-artist report runs over the full history, not the year-restricted
    // view; it is a complete discography dump.
    if let Some(artist) = &args.artist {
        let discography = artist_discography(&events, artist);
        let path = PathBuf::from(report::artist_report_filename(artist));
        std::fs::write(&path, report::render_artist_report(artist, &discography))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {} report to {}", artist, path.display());
    }

    // Console summaries
    println!();
    print!("{}", report::render_day_of_week_summary(&summary));
    println!("------------------------");
    print!("{}", report::render_time_of_day_summary(&summary));
    println!();
    print!("{}", report::render_country_summary(&summary));

    Ok(())
}
