//! Per-artist discography aggregation.

use super::table::FrequencyTable;
use crate::types::PlayEvent;

/// Play counts for one artist's songs and albums as observed in the history.
#[derive(Debug, Clone, Default)]
pub struct ArtistDiscography {
    /// Plays keyed by song title
    pub songs: FrequencyTable<String>,
    /// Plays keyed by album title
    pub albums: FrequencyTable<String>,
}

impl ArtistDiscography {
    /// All songs sorted by play count descending (no length cap).
    pub fn ranked_songs(&self) -> Vec<(String, u64)> {
        self.songs.ranked()
    }

    /// All albums sorted by play count descending (no length cap).
    pub fn ranked_albums(&self) -> Vec<(String, u64)> {
        self.albums.ranked()
    }
}

/// Build the discography for `artist_name` (exact string match).
///
/// A song counts whenever its title is present on a matching event; the
/// album counts only when the event also carries an album title. One event
/// can therefore increment the song table without touching the album table.
pub fn artist_discography(events: &[PlayEvent], artist_name: &str) -> ArtistDiscography {
    let mut discography = ArtistDiscography::default();

    for event in events {
        if event.artist_name.as_deref() != Some(artist_name) {
            continue;
        }
        if let Some(song) = &event.track_name {
            discography.songs.increment(song.clone());
            if let Some(album) = &event.album_name {
                discography.albums.increment(album.clone());
            }
        }
    }

    discography
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(track: Option<&str>, artist: Option<&str>, album: Option<&str>) -> PlayEvent {
        PlayEvent {
            track_name: track.map(String::from),
            artist_name: artist.map(String::from),
            album_name: album.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_exact_artist_only() {
        let events = vec![
            event(Some("Shoota"), Some("Playboi Carti"), Some("Die Lit")),
            event(Some("Shoota"), Some("Playboi Carti"), Some("Die Lit")),
            event(Some("Other"), Some("playboi carti"), Some("Other Album")),
            event(Some("Elsewhere"), Some("Someone Else"), None),
        ];
        let disco = artist_discography(&events, "Playboi Carti");

        assert_eq!(disco.songs.count(&"Shoota".to_string()), 2);
        assert_eq!(disco.albums.count(&"Die Lit".to_string()), 2);
        // Case-different artist is a different artist
        assert_eq!(disco.songs.count(&"Other".to_string()), 0);
    }

    #[test]
    fn test_song_without_album_counts_song_only() {
        let events = vec![
            event(Some("Location"), Some("Playboi Carti"), None),
            event(Some("Location"), Some("Playboi Carti"), Some("Playboi Carti")),
        ];
        let disco = artist_discography(&events, "Playboi Carti");

        assert_eq!(disco.songs.count(&"Location".to_string()), 2);
        assert_eq!(disco.albums.count(&"Playboi Carti".to_string()), 1);
    }

    #[test]
    fn test_missing_track_counts_nothing() {
        // No track name means neither table moves, even with an album present
        let events = vec![event(None, Some("Playboi Carti"), Some("Whole Lotta Red"))];
        let disco = artist_discography(&events, "Playboi Carti");
        assert!(disco.songs.is_empty());
        assert!(disco.albums.is_empty());
    }

    #[test]
    fn test_unknown_artist_yields_empty_lists() {
        let events = vec![event(Some("A"), Some("X"), Some("M"))];
        let disco = artist_discography(&events, "Nobody");
        assert!(disco.ranked_songs().is_empty());
        assert!(disco.ranked_albums().is_empty());
    }
}
