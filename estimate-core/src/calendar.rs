//! Month-view grid generation for the schedule calendar.
//!
//! A month view always shows six weeks of seven days. The grid starts on the
//! configured first weekday on or before the 1st of the month, so leading
//! cells belong to the previous month and trailing cells to the next one.
//!
//! # Example
//!
//! ```
//! use chrono::{Datelike, NaiveDate};
//! use estimate_core::calendar::build_month_grid;
//!
//! // February 2026 starts on a Sunday.
//! let grid = build_month_grid(2026, 1).unwrap();
//!
//! assert_eq!(grid.cells().len(), 42);
//! assert_eq!(grid.first_of_month_index(), 0);
//! assert_eq!(grid.cells()[41].date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
//! ```

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cells in a month view (6 weeks x 7 days).
pub const GRID_CELLS: usize = 42;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Errors that can occur while building a month grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// The (normalized) year cannot be represented as a calendar date.
    #[error("month {month0} of year {year} is outside the supported date range")]
    OutOfRange { year: i32, month0: i32 },
}

/// One day in a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarCell {
    /// The concrete date shown in this cell.
    pub date: NaiveDate,

    /// Whether the date belongs to the month the grid was built for.
    pub in_month: bool,
}

impl CalendarCell {
    /// Compares this cell against a caller-supplied "today".
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// A 42-cell month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month0: u32,
    week_start: Weekday,
    cells: [CalendarCell; GRID_CELLS],
}

impl MonthGrid {
    /// Calendar year of the displayed month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month of the displayed month (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// The weekday in the grid's first column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn cells(&self) -> &[CalendarCell; GRID_CELLS] {
        &self.cells
    }

    /// The grid as six rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Index of the 1st of the month within [`MonthGrid::cells`].
    pub fn first_of_month_index(&self) -> usize {
        self.cells
            .iter()
            .position(|c| c.in_month)
            .unwrap_or_default()
    }

    /// `(year, month0)` of the month before this one.
    pub fn previous(&self) -> (i32, i32) {
        normalize_month(self.year, self.month0 as i32 - 1)
    }

    /// `(year, month0)` of the month after this one.
    pub fn next(&self) -> (i32, i32) {
        normalize_month(self.year, self.month0 as i32 + 1)
    }
}

/// Folds an out-of-range zero-based month into the year.
///
/// `(2025, 12)` becomes `(2026, 0)` and `(2026, -1)` becomes `(2025, 11)`.
pub fn normalize_month(year: i32, month0: i32) -> (i32, i32) {
    (year.saturating_add(month0.div_euclid(12)), month0.rem_euclid(12))
}

/// Builds the Sunday-first month grid for `year` and zero-based `month0`.
///
/// Out-of-range months roll over into neighbouring years rather than being
/// rejected. See [`build_month_grid_with_week_start`] for the full contract.
pub fn build_month_grid(
    year: i32,
    month0: i32,
) -> Result<MonthGrid, CalendarError> {
    build_month_grid_with_week_start(year, month0, Weekday::Sun)
}

/// Builds a month grid whose rows start on `week_start`.
///
/// The grid holds, in ascending order:
/// 1. the days of the previous month needed to reach the 1st from the
///    preceding `week_start`,
/// 2. every day of the requested month,
/// 3. days of the following month until there are 42 cells.
///
/// # Errors
///
/// [`CalendarError::OutOfRange`] when the normalized year (or the padding
/// around it) falls outside the range `chrono` can represent.
pub fn build_month_grid_with_week_start(
    year: i32,
    month0: i32,
    week_start: Weekday,
) -> Result<MonthGrid, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange { year, month0 };

    let (norm_year, norm_month0) = normalize_month(year, month0);
    let first = NaiveDate::from_ymd_opt(norm_year, norm_month0 as u32 + 1, 1)
        .ok_or_else(out_of_range)?;

    let start_pad = (first.weekday().num_days_from_sunday() + 7
        - week_start.num_days_from_sunday())
        % 7;
    let grid_start = first
        .checked_sub_days(Days::new(u64::from(start_pad)))
        .ok_or_else(out_of_range)?;
    // Bounds check the last cell once so the per-cell additions below cannot fail.
    grid_start
        .checked_add_days(Days::new(GRID_CELLS as u64 - 1))
        .ok_or_else(out_of_range)?;

    let cells = std::array::from_fn(|i| {
        let date = grid_start + Days::new(i as u64);
        CalendarCell {
            date,
            in_month: date.year() == first.year() && date.month() == first.month(),
        }
    });

    Ok(MonthGrid {
        year: norm_year,
        month0: norm_month0 as u32,
        week_start,
        cells,
    })
}
