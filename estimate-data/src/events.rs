//! CSV loader for extra schedule events.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column  | Required | Notes                                            |
//! |---------|----------|--------------------------------------------------|
//! | `date`  | yes      | `dd/mm/yyyy`                                     |
//! | `title` | yes      |                                                  |
//! | `kind`  | no       | `phase`, `order`, `delivery` or `other` (default) |
//!
//! ```csv
//! date,title,kind
//! 24/02/2026,Crew start,phase
//! 25/02/2026,Dumpster drop-off,
//! ```
//!
//! Dates are not validated here. Rows with a bad date load fine and are
//! skipped later by [`estimate_core::schedule::group_by_day`].

use std::io::Read;

use estimate_core::models::{EventKind, ScheduleEvent};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading schedule events.
#[derive(Debug, Error)]
pub enum ScheduleLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognised event kind '{kind}' on row {row}")]
    InvalidKind { kind: String, row: usize },
}

impl From<csv::Error> for ScheduleLoadError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoadError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct EventRow {
    date: String,
    title: String,
    #[serde(default)]
    kind: Option<String>,
}

fn parse_kind(
    kind: Option<String>,
    row: usize,
) -> Result<EventKind, ScheduleLoadError> {
    let Some(kind) = kind.filter(|k| !k.trim().is_empty()) else {
        return Ok(EventKind::Other);
    };
    match kind.trim().to_ascii_lowercase().as_str() {
        "phase" => Ok(EventKind::Phase),
        "order" => Ok(EventKind::Order),
        "delivery" => Ok(EventKind::Delivery),
        "other" => Ok(EventKind::Other),
        _ => Err(ScheduleLoadError::InvalidKind { kind, row }),
    }
}

/// Loader for schedule events stored as CSV.
pub struct ScheduleCsvLoader;

impl ScheduleCsvLoader {
    /// Parse schedule events from a CSV reader.
    ///
    /// The reader can be anything implementing `Read`, such as a file or a
    /// byte slice. Row numbers in errors are 1-based, not counting the header.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScheduleEvent>, ScheduleLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut events = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let row: EventRow = result?;
            let kind = parse_kind(row.kind, index + 1)?;
            events.push(ScheduleEvent::new(row.date, row.title, kind));
        }

        Ok(events)
    }
}
