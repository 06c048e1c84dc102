//! Core domain types for replayed
//!
//! The canonical record is a [`PlayEvent`]: one playback in a Spotify
//! extended-streaming-history export. Every field in the export is optional
//! in practice (podcast rows carry no track metadata, old rows predate the
//! `skipped` flag), so the model keeps each field as an `Option` and exposes
//! accessors that encode the documented missing-field policies:
//!
//! | Field | Missing means |
//! |-------|---------------|
//! | `track_name`, `artist_name`, `album_name` | excluded from the fully-populated path, or sentinel text |
//! | `timestamp` | excluded from temporal and year aggregation |
//! | `country` | excluded from geographic aggregation |
//! | `skipped` | not skipped |
//! | `reason_start` | not an intentional play |

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel used when a track name is absent on the legacy aggregation path.
pub const UNKNOWN_TRACK: &str = "Unknown Track";
/// Sentinel used when an artist name is absent on the legacy aggregation path.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Sentinel used when an album name is absent on the legacy aggregation path.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// `reason_start` value marking a play the listener started by clicking a row.
pub const REASON_CLICKROW: &str = "clickrow";

/// Timestamp format used throughout the export (`2024-01-01T08:00:00Z`).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One playback record from a streaming-history export.
///
/// Immutable after load; aggregators take event slices by reference and
/// never mutate them. Unknown JSON fields in the export are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayEvent {
    /// Track title
    #[serde(rename = "master_metadata_track_name")]
    pub track_name: Option<String>,

    /// Album artist
    #[serde(rename = "master_metadata_album_artist_name")]
    pub artist_name: Option<String>,

    /// Album title
    #[serde(rename = "master_metadata_album_album_name")]
    pub album_name: Option<String>,

    /// UTC timestamp string, `YYYY-MM-DDTHH:MM:SSZ`
    #[serde(rename = "ts")]
    pub timestamp: Option<String>,

    /// Connection country code, verbatim from the export (e.g. "US")
    #[serde(rename = "conn_country")]
    pub country: Option<String>,

    /// Whether the listener skipped the track
    pub skipped: Option<bool>,

    /// Why playback started (e.g. "clickrow", "trackdone")
    pub reason_start: Option<String>,
}

impl PlayEvent {
    /// Track name, or the sentinel placeholder when absent.
    pub fn track_or_unknown(&self) -> &str {
        self.track_name.as_deref().unwrap_or(UNKNOWN_TRACK)
    }

    /// Artist name, or the sentinel placeholder when absent.
    pub fn artist_or_unknown(&self) -> &str {
        self.artist_name.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    /// Album name, or the sentinel placeholder when absent.
    pub fn album_or_unknown(&self) -> &str {
        self.album_name.as_deref().unwrap_or(UNKNOWN_ALBUM)
    }

    /// True when track, artist, and album names are all present.
    pub fn is_fully_populated(&self) -> bool {
        self.track_name.is_some() && self.artist_name.is_some() && self.album_name.is_some()
    }

    /// True when the listener skipped this play.
    pub fn was_skipped(&self) -> bool {
        self.skipped == Some(true)
    }

    /// True when playback started from a user click on a track row.
    pub fn is_intentional(&self) -> bool {
        self.reason_start.as_deref() == Some(REASON_CLICKROW)
    }

    /// Parse the timestamp strictly as `YYYY-MM-DDTHH:MM:SSZ` UTC.
    ///
    /// Returns `None` when the field is absent or does not match the format
    /// exactly; callers treat both the same way (the event is excluded from
    /// temporal aggregation rather than aborting the run).
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let ts = self.timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
