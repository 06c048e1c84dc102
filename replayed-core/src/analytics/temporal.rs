//! Time-based aggregation: day of week, time of day, and the year filter.
//!
//! All three read each event's timestamp through the strict parser in
//! [`PlayEvent::parsed_timestamp`]. Events whose timestamp is absent or does
//! not match the export format are skipped silently; a malformed row should
//! cost one data point, not the whole run.

use super::table::FrequencyTable;
use crate::types::PlayEvent;
use chrono::{Datelike, Timelike, Weekday};

/// The four fixed time-of-day buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All buckets in their fixed display order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Classify a UTC hour (0-23). The buckets are disjoint and cover every
    /// hour: anything outside 05:00-20:59 is Night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Report label, bounds included.
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning (05:00 - 11:59)",
            TimeOfDay::Afternoon => "Afternoon (12:00 - 16:59)",
            TimeOfDay::Evening => "Evening (17:00 - 20:59)",
            TimeOfDay::Night => "Night (21:00 - 04:59)",
        }
    }
}

/// Weekday display name.
fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Count plays per weekday name.
pub fn count_by_day_of_week(events: &[PlayEvent]) -> FrequencyTable<String> {
    let mut table = FrequencyTable::new();

    for event in events {
        if let Some(ts) = event.parsed_timestamp() {
            table.increment(day_name(ts.weekday()).to_string());
        }
    }

    table
}

/// Count plays per time-of-day bucket, keyed by the bucket label.
pub fn count_by_time_of_day(events: &[PlayEvent]) -> FrequencyTable<String> {
    let mut table = FrequencyTable::new();

    for event in events {
        if let Some(ts) = event.parsed_timestamp() {
            let bucket = TimeOfDay::from_hour(ts.hour());
            table.increment(bucket.label().to_string());
        }
    }

    table
}

/// Keep only events whose timestamp falls in `year`.
///
/// Order-preserving and non-mutating. Events with absent or unparseable
/// timestamps are excluded, so the result always has a known year and the
/// filter is idempotent.
pub fn filter_by_year(events: &[PlayEvent], year: i32) -> Vec<PlayEvent> {
    events
        .iter()
        .filter(|event| {
            event
                .parsed_timestamp()
                .is_some_and(|ts| ts.year() == year)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_at(ts: &str) -> PlayEvent {
        PlayEvent {
            timestamp: Some(ts.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_buckets_exhaustive_and_disjoint() {
        for hour in 0..24 {
            let bucket = TimeOfDay::from_hour(hour);
            // Exactly one bucket claims each hour
            let claiming: Vec<_> = TimeOfDay::ALL
                .iter()
                .filter(|b| TimeOfDay::from_hour(hour) == **b)
                .collect();
            assert_eq!(claiming.len(), 1, "hour {hour}");
            // And the bounds match the labels
            match hour {
                5..=11 => assert_eq!(bucket, TimeOfDay::Morning),
                12..=16 => assert_eq!(bucket, TimeOfDay::Afternoon),
                17..=20 => assert_eq!(bucket, TimeOfDay::Evening),
                _ => assert_eq!(bucket, TimeOfDay::Night),
            }
        }
    }

    #[test]
    fn test_day_of_week_counts() {
        // 2024-01-01 was a Monday
        let events = vec![
            event_at("2024-01-01T08:00:00Z"),
            event_at("2024-01-02T22:00:00Z"),
            event_at("2024-01-08T12:00:00Z"),
        ];
        let table = count_by_day_of_week(&events);
        assert_eq!(table.count(&"Monday".to_string()), 2);
        assert_eq!(table.count(&"Tuesday".to_string()), 1);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_time_of_day_counts() {
        let events = vec![
            event_at("2024-01-01T08:00:00Z"),
            event_at("2024-01-01T13:00:00Z"),
            event_at("2024-01-01T18:00:00Z"),
            event_at("2024-01-01T22:00:00Z"),
            event_at("2024-01-01T03:00:00Z"),
        ];
        let table = count_by_time_of_day(&events);
        assert_eq!(table.count(&"Morning (05:00 - 11:59)".to_string()), 1);
        assert_eq!(table.count(&"Afternoon (12:00 - 16:59)".to_string()), 1);
        assert_eq!(table.count(&"Evening (17:00 - 20:59)".to_string()), 1);
        assert_eq!(table.count(&"Night (21:00 - 04:59)".to_string()), 2);
    }

    #[test]
    fn test_unparseable_timestamps_skipped() {
        let events = vec![
            event_at("2024-01-01T08:00:00Z"),
            event_at("garbage"),
            PlayEvent::default(),
        ];
        assert_eq!(count_by_day_of_week(&events).total(), 1);
        assert_eq!(count_by_time_of_day(&events).total(), 1);
    }

    #[test]
    fn test_year_filter() {
        let events = vec![
            event_at("2023-12-31T23:59:59Z"),
            event_at("2024-01-01T00:00:00Z"),
            event_at("2024-06-15T12:00:00Z"),
            event_at("bad timestamp"),
            PlayEvent::default(),
        ];
        let filtered = filter_by_year(&events, 2024);
        assert_eq!(filtered.len(), 2);
        // Order preserved
        assert_eq!(
            filtered[0].timestamp.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_year_filter_idempotent() {
        let events = vec![
            event_at("2024-01-01T00:00:00Z"),
            event_at("2023-01-01T00:00:00Z"),
            event_at("2024-06-15T12:00:00Z"),
        ];
        let once = filter_by_year(&events, 2024);
        let twice = filter_by_year(&once, 2024);
        assert_eq!(once, twice);
    }
}
