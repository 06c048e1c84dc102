//! Report rendering.
//!
//! Pure string builders so the formats are testable without touching the
//! filesystem or a terminal; the CLI decides where each report goes.
//!
//! The numbered-line format is fixed: `"{rank}- {label}: {count} times"`,
//! with track entries spelled `"{rank}- {song} by {artist}: {count} times"`.
//! Ranks restart at 1 in every section.

use crate::analytics::{ArtistDiscography, ListeningSummary, TimeOfDay};
use crate::config::ReportConfig;

/// Render one numbered section: header line, then one line per entry.
fn push_section(out: &mut String, header: &str, entries: &[(String, u64)]) {
    out.push_str(header);
    out.push('\n');
    for (rank, (label, count)) in entries.iter().enumerate() {
        out.push_str(&format!("{}- {}: {} times\n", rank + 1, label, count));
    }
}

/// Track entries carry a composite label: `"{song} by {artist}"`.
fn track_label(entries: Vec<((String, String), u64)>) -> Vec<(String, u64)> {
    entries
        .into_iter()
        .map(|((song, artist), count)| (format!("{} by {}", song, artist), count))
        .collect()
}

/// Render the main top-stats report.
///
/// Section order is fixed: Top Artists, Top Songs, Top Albums, Top Skipped
/// Songs, Top Intentional Songs. Sections are separated by one blank line.
pub fn render_top_stats(summary: &ListeningSummary, config: &ReportConfig) -> String {
    let mut out = String::new();

    push_section(
        &mut out,
        "Top Artists:",
        &summary.plays.artists.top_n(config.top_artists),
    );
    out.push('\n');
    push_section(
        &mut out,
        "Top Songs:",
        &track_label(summary.plays.tracks.top_n(config.top_songs)),
    );
    out.push('\n');
    push_section(
        &mut out,
        "Top Albums:",
        &summary.plays.albums.top_n(config.top_albums),
    );
    out.push('\n');
    push_section(
        &mut out,
        "Top Skipped Songs:",
        &summary.plays.skipped.top_n(config.top_skipped),
    );
    out.push('\n');
    push_section(
        &mut out,
        "Top Intentional Songs:",
        &summary.intentional.top_n(config.top_intentional),
    );

    out
}

/// Render the per-artist report: all songs, then all albums, uncapped.
pub fn render_artist_report(artist_name: &str, discography: &ArtistDiscography) -> String {
    let mut out = String::new();

    push_section(
        &mut out,
        &format!("All Songs by {}:", artist_name),
        &discography.ranked_songs(),
    );
    out.push('\n');
    push_section(
        &mut out,
        &format!("Top Albums by {}:", artist_name),
        &discography.ranked_albums(),
    );

    out
}

/// File name for a per-artist report.
pub fn artist_report_filename(artist_name: &str) -> String {
    format!("{}_all_songs.txt", artist_name)
}

/// Console summary: plays per weekday, sorted descending by count.
pub fn render_day_of_week_summary(summary: &ListeningSummary) -> String {
    let mut out = String::from("Listening Stats by Day of the Week:\n");
    for (day, count) in summary.by_day_of_week.ranked() {
        out.push_str(&format!("{}: {} times\n", day, count));
    }
    out
}

/// Console summary: plays per time-of-day bucket, in fixed bucket order.
///
/// Buckets with no plays are omitted, matching the frequency tables
/// elsewhere (a key exists only once something counted toward it).
pub fn render_time_of_day_summary(summary: &ListeningSummary) -> String {
    let mut out = String::from("Listening Stats by Time of Day:\n");
    for bucket in TimeOfDay::ALL {
        let count = summary.by_time_of_day.count(&bucket.label().to_string());
        if count > 0 {
            out.push_str(&format!("{}: {} times\n", bucket.label(), count));
        }
    }
    out
}

/// Console summary: plays per country code, sorted descending by count.
pub fn render_country_summary(summary: &ListeningSummary) -> String {
    let mut out = String::from("Listening Stats by Country:\n");
    for (country, count) in summary.by_country.ranked() {
        out.push_str(&format!("{}: {} times\n", country, count));
    }
    out
}
