//! Play-count aggregation.
//!
//! Two aggregators live here, and they deliberately take different inputs:
//!
//! - [`count_plays`] expects events already filtered to fully-populated
//!   records (track, artist, and album all present) and builds the four
//!   core tables in one pass.
//! - [`count_intentional_plays`] scans the *unfiltered* history, because a
//!   click-initiated play should count even when album metadata is missing.
//!
//! Callers must not hand the filtered sequence to the intentional counter
//! or vice versa.

use super::table::FrequencyTable;
use crate::types::PlayEvent;

/// The four core frequency tables built from fully-populated events.
#[derive(Debug, Clone, Default)]
pub struct PlayCounts {
    /// Plays keyed by (track name, artist name)
    pub tracks: FrequencyTable<(String, String)>,
    /// Plays keyed by artist name
    pub artists: FrequencyTable<String>,
    /// Plays keyed by album name
    pub albums: FrequencyTable<String>,
    /// Skipped plays keyed by track name
    pub skipped: FrequencyTable<String>,
}

/// Keep only events with track, artist, and album names all present.
pub fn filter_fully_populated(events: &[PlayEvent]) -> Vec<&PlayEvent> {
    events.iter().filter(|e| e.is_fully_populated()).collect()
}

/// Count tracks, artists, albums, and skips in a single pass.
///
/// Each event increments the track, artist, and album tables exactly once,
/// and the skipped table when its `skipped` flag is set. Events are expected
/// to be fully populated; if one is not, sentinel placeholder names are
/// substituted rather than failing.
pub fn count_plays<'a, I>(events: I) -> PlayCounts
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let mut counts = PlayCounts::default();

    for event in events {
        let track = event.track_or_unknown().to_string();
        let artist = event.artist_or_unknown().to_string();
        let album = event.album_or_unknown().to_string();

        counts.tracks.increment((track.clone(), artist.clone()));
        counts.artists.increment(artist);
        counts.albums.increment(album);

        if event.was_skipped() {
            counts.skipped.increment(track);
        }
    }

    counts
}

/// Count intentional plays: track plays the listener started by clicking.
///
/// Operates on the unfiltered history. An event contributes when its
/// `reason_start` is the click sentinel and its track name is present;
/// missing album or artist metadata does not exclude it.
pub fn count_intentional_plays(events: &[PlayEvent]) -> FrequencyTable<String> {
    let mut table = FrequencyTable::new();

    for event in events {
        if event.is_intentional() {
            if let Some(track) = &event.track_name {
                table.increment(track.clone());
            }
        }
    }

    table
}
