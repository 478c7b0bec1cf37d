//! Bucketing of dated events by calendar day.
//!
//! Dates arrive as `dd/mm/yyyy` text. Grouping produces a sparse map: a day
//! only gets a key when at least one event falls on it.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::CalendarCell;
use crate::models::ScheduleEvent;

/// Key of a day bucket. `month0` is zero-based to line up with
/// [`crate::calendar::build_month_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
            day: date.day(),
        }
    }
}

impl From<&CalendarCell> for DayKey {
    fn from(cell: &CalendarCell) -> Self {
        cell.date.into()
    }
}

/// Anything that can be placed on the schedule calendar.
pub trait Scheduled {
    /// The `dd/mm/yyyy` date of the item.
    fn date_text(&self) -> &str;
}

impl Scheduled for ScheduleEvent {
    fn date_text(&self) -> &str {
        &self.date
    }
}

/// Parses a `dd/mm/yyyy` date into a [`DayKey`].
///
/// Returns `None` for malformed text and for dates that do not exist
/// (`31/02/2026`, or a `mm/dd/yyyy` value such as `01/20/2026`).
///
/// # Examples
///
/// ```
/// use estimate_core::schedule::{parse_day_key, DayKey};
///
/// assert_eq!(
///     parse_day_key("05/02/2026"),
///     Some(DayKey { year: 2026, month0: 1, day: 5 })
/// );
/// assert_eq!(parse_day_key("01/20/2026"), None);
/// ```
pub fn parse_day_key(date: &str) -> Option<DayKey> {
    NaiveDate::parse_from_str(date.trim(), "%d/%m/%Y")
        .ok()
        .map(DayKey::from)
}

/// Groups events by the day they fall on.
///
/// Events sharing a date end up in the same bucket, in input order. Events
/// whose date cannot be parsed are skipped and logged.
pub fn group_by_day<E: Scheduled>(events: &[E]) -> BTreeMap<DayKey, Vec<&E>> {
    let mut by_day: BTreeMap<DayKey, Vec<&E>> = BTreeMap::new();

    for event in events {
        match parse_day_key(event.date_text()) {
            Some(key) => by_day.entry(key).or_default().push(event),
            None => warn!(date = %event.date_text(), "skipping event with unparseable date"),
        }
    }

    by_day
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::EventKind;

    fn event(
        date: &str,
        title: &str,
    ) -> ScheduleEvent {
        ScheduleEvent::new(date, title, EventKind::Other)
    }

    #[test]
    fn parse_day_key_uses_day_month_order() {
        let key = parse_day_key("15/01/2026").expect("valid date");

        assert_eq!(
            key,
            DayKey {
                year: 2026,
                month0: 0,
                day: 15
            }
        );
    }

    #[test]
    fn parse_day_key_trims_and_rejects_bad_input() {
        assert!(parse_day_key(" 28/01/2026 ").is_some());
        assert_eq!(parse_day_key(""), None);
        assert_eq!(parse_day_key("-"), None);
        assert_eq!(parse_day_key("31/02/2026"), None);
        assert_eq!(parse_day_key("2026-02-05"), None);
    }

    #[test]
    fn parse_day_key_handles_leap_day() {
        assert!(parse_day_key("29/02/2024").is_some());
        assert_eq!(parse_day_key("29/02/2025"), None);
    }

    #[test]
    fn same_day_events_share_a_bucket() {
        let events = vec![
            event("02/02/2026", "Schedule"),
            event("05/02/2026", "Delivery"),
            event("02/02/2026", "Crew call"),
        ];

        let grouped = group_by_day(&events);

        assert_eq!(grouped.len(), 2);
        let key = parse_day_key("02/02/2026").unwrap();
        let titles: Vec<_> = grouped[&key].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Schedule", "Crew call"]);
    }

    #[test]
    fn empty_days_have_no_key() {
        let events = vec![event("02/02/2026", "Schedule")];

        let grouped = group_by_day(&events);

        let empty_day = parse_day_key("03/02/2026").unwrap();
        assert!(!grouped.contains_key(&empty_day));
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let events = vec![event("01/20/2026", "First Call"), event("", "Reminder")];

        let grouped = group_by_day(&events);

        assert!(grouped.is_empty());
    }

    #[test]
    fn buckets_are_ordered_chronologically() {
        let events = vec![
            event("05/02/2026", "b"),
            event("28/12/2025", "a"),
            event("01/03/2026", "c"),
        ];

        let grouped = group_by_day(&events);

        let keys: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                DayKey { year: 2025, month0: 11, day: 28 },
                DayKey { year: 2026, month0: 1, day: 5 },
                DayKey { year: 2026, month0: 2, day: 1 },
            ]
        );
    }

    #[test]
    fn calendar_cells_map_to_day_keys() {
        let grid = crate::calendar::build_month_grid(2026, 1).unwrap();

        let key = DayKey::from(&grid.cells()[4]);

        assert_eq!(key, DayKey { year: 2026, month0: 1, day: 5 });
    }
}
