//! Summary generation - one entry point that runs every aggregator.

use super::frequency::{self, PlayCounts};
use super::geography;
use super::table::FrequencyTable;
use super::temporal;
use crate::types::PlayEvent;

/// Options controlling summary generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryOptions {
    /// Restrict the history to this calendar year before aggregating
    pub year: Option<i32>,
}

/// Every aggregate table computed from one history.
#[derive(Debug, Clone)]
pub struct ListeningSummary {
    /// Track/artist/album/skip tables over fully-populated events
    pub plays: PlayCounts,
    /// Intentional plays over the unfiltered history
    pub intentional: FrequencyTable<String>,
    /// Plays per weekday name
    pub by_day_of_week: FrequencyTable<String>,
    /// Plays per time-of-day bucket label
    pub by_time_of_day: FrequencyTable<String>,
    /// Plays per country code
    pub by_country: FrequencyTable<String>,
    /// Number of events after the optional year restriction
    pub event_count: usize,
}

impl ListeningSummary {
    /// Run every aggregator over `events`.
    ///
    /// The passes are independent pure folds; the intentional-play and
    /// temporal/geographic tables see the (possibly year-restricted) history
    /// unfiltered, while the play-count tables see only fully-populated
    /// events.
    pub fn generate(events: &[PlayEvent], options: &SummaryOptions) -> Self {
        let restricted;
        let events: &[PlayEvent] = match options.year {
            Some(year) => {
                restricted = temporal::filter_by_year(events, year);
                tracing::debug!(year, kept = restricted.len(), "Applied year filter");
                &restricted
            }
            None => events,
        };

        let fully_populated = frequency::filter_fully_populated(events);
        let plays = frequency::count_plays(fully_populated);

        Self {
            plays,
            intentional: frequency::count_intentional_plays(events),
            by_day_of_week: temporal::count_by_day_of_week(events),
            by_time_of_day: temporal::count_by_time_of_day(events),
            by_country: geography::count_by_country(events),
            event_count: events.len(),
        }
    }
}
