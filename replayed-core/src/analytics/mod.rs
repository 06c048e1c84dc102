//! Analytics module for replayed
//!
//! Aggregate listening statistics over a streaming history:
//! - Frequency tables (tracks, artists, albums, skips, intentional plays)
//! - Temporal distribution (day of week, time of day) and the year filter
//! - Geographic distribution
//! - Per-artist discographies
//!
//! Each aggregator is a pure fold over an immutable event slice and owns its
//! output table; they share nothing and can run in any order. The
//! [`summary::ListeningSummary`] entry point runs them all.

pub mod artist;
pub mod frequency;
pub mod geography;
pub mod summary;
pub mod table;
pub mod temporal;

pub use artist::{artist_discography, ArtistDiscography};
pub use frequency::{count_intentional_plays, count_plays, filter_fully_populated, PlayCounts};
pub use geography::count_by_country;
pub use summary::{ListeningSummary, SummaryOptions};
pub use table::FrequencyTable;
pub use temporal::{count_by_day_of_week, count_by_time_of_day, filter_by_year, TimeOfDay};
