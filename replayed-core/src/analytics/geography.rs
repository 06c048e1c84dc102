//! Geographic aggregation.

use super::table::FrequencyTable;
use crate::types::PlayEvent;

/// Count plays per connection country code.
///
/// Codes are used verbatim as keys; no normalization and no lookup to
/// country names. Events without a country are skipped.
pub fn count_by_country(events: &[PlayEvent]) -> FrequencyTable<String> {
    let mut table = FrequencyTable::new();

    for event in events {
        if let Some(country) = &event.country {
            table.increment(country.clone());
        }
    }

    table
}
