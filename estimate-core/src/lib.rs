//! Core logic behind the roofing estimate screen: money strings, the
//! schedule month grid, day bucketing of events, and the estimate summary.

pub mod calendar;
pub mod models;
pub mod money;
pub mod schedule;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use calendar::{CalendarCell, CalendarError, MonthGrid, build_month_grid};
pub use models::*;
pub use money::{format_money, parse_money};
pub use schedule::{DayKey, Scheduled, group_by_day, parse_day_key};
pub use summary::EstimateSummary;
