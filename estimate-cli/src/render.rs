//! Plain-text rendering of summaries, calendars and catalogs.
//!
//! There is one renderer per view. Differences between the design layouts
//! come from a [`SummaryLayout`] value derived from the design's
//! [`LayoutVariant`], not from separate code paths per design.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use estimate_core::calendar::MonthGrid;
use estimate_core::models::{LayoutVariant, ScheduleEvent};
use estimate_core::money::format_amount;
use estimate_core::schedule::DayKey;
use estimate_core::summary::EstimateSummary;
use estimate_data::DesignCatalog;

const PAID_IN_FULL: &str = "PAID IN FULL";

/// Knobs that distinguish the layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLayout {
    /// One labeled figure per line instead of a single joined line.
    pub stacked: bool,
    /// Show the estimate title and status next to the number.
    pub show_title: bool,
    /// Show paid and savings figures.
    pub show_payments: bool,
    /// Show the change-order and expense tab totals.
    pub show_tab_totals: bool,
}

impl From<LayoutVariant> for SummaryLayout {
    fn from(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Default => Self {
                stacked: true,
                show_title: true,
                show_payments: true,
                show_tab_totals: true,
            },
            LayoutVariant::Compact => Self {
                stacked: false,
                show_title: true,
                show_payments: true,
                show_tab_totals: false,
            },
            LayoutVariant::Minimal => Self {
                stacked: false,
                show_title: false,
                show_payments: false,
                show_tab_totals: false,
            },
        }
    }
}

/// Renders the estimate summary using the layout of its design set.
pub fn render_summary(summary: &EstimateSummary) -> String {
    let layout = SummaryLayout::from(summary.layout_variant);

    let mut figures: Vec<(&str, String)> = vec![("Offered", summary.offered_price.clone())];
    if layout.show_payments {
        figures.push(("Paid", summary.total_paid.clone()));
        figures.push(("Savings", summary.total_savings.clone()));
    }
    match &summary.remaining {
        Some(remaining) => figures.push(("Remaining", remaining.clone())),
        None => figures.push(("", PAID_IN_FULL.to_string())),
    }
    if layout.show_tab_totals {
        figures.push(("Change orders", format_amount(summary.change_order_total)));
        figures.push(("Expenses", format_amount(summary.expense_total)));
    }

    let mut heading = summary.estimate_number.clone();
    if layout.show_title {
        let _ = write!(heading, "  {} [{}]", summary.title, summary.status);
    }

    let mut out = String::new();
    if layout.stacked {
        let _ = writeln!(out, "{heading}");
        for (label, value) in &figures {
            let _ = writeln!(out, "  {label:<14}{value}");
        }
    } else {
        let joined: Vec<String> = figures
            .iter()
            .map(|(label, value)| {
                if label.is_empty() {
                    value.clone()
                } else {
                    format!("{label} {value}")
                }
            })
            .collect();
        let separator = if layout.show_title { "\n  " } else { "  " };
        let _ = writeln!(out, "{heading}{separator}{}", joined.join(" | "));
    }
    out
}

/// Renders a month grid with a legend and the events of the month.
///
/// Cell flags: `*` has events, `@` is `today`, `#` is `today` and has events,
/// `-` lies outside the month. Event and today flags win over `-`.
///
/// The last line names the neighbouring months, `< January 2026 | March 2026 >`.
pub fn render_calendar(
    grid: &MonthGrid,
    by_day: &BTreeMap<DayKey, Vec<&ScheduleEvent>>,
    today: Option<NaiveDate>,
) -> String {
    let mut out = String::new();
    let first = grid.cells()[grid.first_of_month_index()].date;
    let _ = writeln!(out, "{}", first.format("%B %Y"));

    let mut weekday = grid.week_start();
    let mut header = String::new();
    for _ in 0..7 {
        let name = weekday.to_string();
        let _ = write!(header, " {:>2} ", &name[..2]);
        weekday = weekday.succ();
    }
    let _ = writeln!(out, "{}", header.trim_end());

    for week in grid.weeks() {
        let mut line = String::new();
        for cell in week {
            let has_events = by_day.contains_key(&DayKey::from(cell));
            let is_today = today.is_some_and(|t| cell.is_today(t));
            let flag = match (has_events, is_today) {
                (true, true) => '#',
                (true, false) => '*',
                (false, true) => '@',
                (false, false) if !cell.in_month => '-',
                (false, false) => ' ',
            };
            let _ = write!(line, " {:>2}{flag}", cell.date.day());
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let month_events: Vec<_> = by_day
        .iter()
        .filter(|(key, _)| key.year == grid.year() && key.month0 == grid.month0())
        .collect();
    let total: usize = month_events.iter().map(|(_, events)| events.len()).sum();
    let _ = writeln!(out, "{total} event(s) on {} day(s)", month_events.len());
    for (key, events) in month_events {
        for event in events {
            let _ = writeln!(
                out,
                "  {:02}  {} ({})",
                key.day,
                event.title,
                event.kind.as_str()
            );
        }
    }

    let (prev_year, prev_month0) = grid.previous();
    let (next_year, next_month0) = grid.next();
    if let (Some(prev), Some(next)) = (
        month_title(prev_year, prev_month0),
        month_title(next_year, next_month0),
    ) {
        let _ = writeln!(out, "< {prev} | {next} >");
    }
    out
}

/// `"March 2026"` for a year and zero-based month, if `chrono` can hold it.
fn month_title(
    year: i32,
    month0: i32,
) -> Option<String> {
    let month = u32::try_from(month0).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first.format("%B %Y").to_string())
}

/// One line per design set in the catalog.
pub fn render_designs(catalog: &DesignCatalog) -> String {
    let mut out = String::new();
    for design in catalog.iter() {
        let _ = writeln!(
            out,
            "{}  {:<8} {}  {}",
            design.id,
            design.layout_variant.as_str(),
            design.header.estimate_number,
            design.header.title
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use estimate_core::calendar::build_month_grid;
    use estimate_core::models::EventKind;
    use estimate_core::schedule::group_by_day;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    fn summary(layout_variant: LayoutVariant) -> EstimateSummary {
        EstimateSummary {
            estimate_number: "EST-552882".to_string(),
            title: "Full Reroof".to_string(),
            status: "Sold".to_string(),
            layout_variant,
            offered_price: "$12,450.00".to_string(),
            total_paid: "$3,112.50".to_string(),
            total_savings: "$1,245.00".to_string(),
            paid_in_full: false,
            remaining: Some("$9,337.50".to_string()),
            change_order_total: Decimal::new(23500, 2),
            expense_total: Decimal::new(962500, 2),
        }
    }

    #[test]
    fn default_layout_stacks_every_figure() {
        let text = render_summary(&summary(LayoutVariant::Default));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "EST-552882  Full Reroof [Sold]");
        assert_eq!(lines.len(), 7);
        assert!(lines.contains(&"  Remaining     $9,337.50"));
        assert!(lines.contains(&"  Change orders $235.00"));
        assert!(lines.contains(&"  Expenses      $9,625.00"));
    }

    #[test]
    fn compact_layout_joins_figures() {
        let text = render_summary(&summary(LayoutVariant::Compact));

        assert_eq!(
            text,
            "EST-552882  Full Reroof [Sold]\n  \
             Offered $12,450.00 | Paid $3,112.50 | Savings $1,245.00 | Remaining $9,337.50\n"
        );
    }

    #[test]
    fn minimal_layout_is_one_line() {
        let mut paid = summary(LayoutVariant::Minimal);
        paid.paid_in_full = true;
        paid.remaining = None;

        let text = render_summary(&paid);

        assert_eq!(text, "EST-552882  Offered $12,450.00 | PAID IN FULL\n");
    }

    #[test]
    fn calendar_marks_event_days_and_padding() {
        let grid = build_month_grid(2026, 1).unwrap();
        let events = vec![
            ScheduleEvent::new("05/02/2026", "Expected delivery", EventKind::Delivery),
            ScheduleEvent::new("28/01/2026", "Order placed", EventKind::Order),
        ];
        let by_day = group_by_day(&events);
        let today = NaiveDate::from_ymd_opt(2026, 2, 10);

        let text = render_calendar(&grid, &by_day, today);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "February 2026");
        assert_eq!(lines[1], " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], "  1   2   3   4   5*  6   7");
        assert_eq!(lines[3], "  8   9  10@ 11  12  13  14");
        assert_eq!(lines[6], "  1-  2-  3-  4-  5-  6-  7-");
        assert_eq!(lines[8], "1 event(s) on 1 day(s)");
        assert_eq!(lines[9], "  05  Expected delivery (delivery)");
        assert_eq!(lines[10], "< January 2026 | March 2026 >");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn calendar_navigation_crosses_year_end() {
        let grid = build_month_grid(2025, 11).unwrap();

        let text = render_calendar(&grid, &BTreeMap::new(), None);

        assert_eq!(text.lines().last(), Some("< November 2025 | January 2026 >"));
    }

    #[test]
    fn calendar_keeps_today_marker_on_event_days() {
        let grid = build_month_grid(2026, 1).unwrap();
        let events = vec![ScheduleEvent::new("10/02/2026", "Crew call", EventKind::Phase)];
        let by_day = group_by_day(&events);
        let today = NaiveDate::from_ymd_opt(2026, 2, 10);

        let text = render_calendar(&grid, &by_day, today);

        assert_eq!(text.lines().nth(3), Some("  8   9  10# 11  12  13  14"));
    }

    #[test]
    fn calendar_header_follows_week_start() {
        let grid = estimate_core::calendar::build_month_grid_with_week_start(
            2026,
            1,
            chrono::Weekday::Mon,
        )
        .unwrap();

        let text = render_calendar(&grid, &BTreeMap::new(), None);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], " Mo  Tu  We  Th  Fr  Sa  Su");
        assert_eq!(lines[2], " 26- 27- 28- 29- 30- 31-  1");
    }

    #[test]
    fn designs_listing() {
        let catalog = DesignCatalog::bundled().unwrap();

        let text = render_designs(&catalog);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2  compact  EST-552882  Full Reroof - Martinez Family");
    }
}
