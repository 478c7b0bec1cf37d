//! Command dispatch.
//!
//! Every command renders to a `String`; `main` only prints it. This keeps the
//! commands testable without capturing stdout.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use chrono::{Datelike, NaiveDate, Weekday};
use estimate_core::calendar::build_month_grid_with_week_start;
use estimate_core::models::ScheduleEvent;
use estimate_core::money::{format_amount, format_money, parse_money, sum_money};
use estimate_core::schedule::group_by_day;
use estimate_core::summary::EstimateSummary;
use estimate_data::{DesignCatalog, ScheduleCsvLoader};
use tracing::{debug, info};

use crate::cli::{Command, MoneyCommand};
use crate::config::Settings;
use crate::render::{render_calendar, render_designs, render_summary};

/// Loads the catalog named in the settings, or the bundled one.
pub fn load_catalog(settings: &Settings) -> anyhow::Result<DesignCatalog> {
    match &settings.catalog {
        Some(path) => {
            info!(path = %path.display(), "loading design catalog");
            DesignCatalog::from_path(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))
        }
        None => DesignCatalog::bundled().context("bundled catalog is invalid"),
    }
}

/// Runs one command and returns its output.
///
/// `today` anchors the default calendar month and the today marker.
pub fn execute(
    command: &Command,
    settings: &Settings,
    catalog: &DesignCatalog,
    today: NaiveDate,
) -> anyhow::Result<String> {
    match command {
        Command::Money { action } => Ok(run_money(action)),
        Command::Calendar {
            year,
            month,
            events,
            week_start,
        } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or(today.month() as i32);
            let week_start: Weekday = week_start.unwrap_or(settings.week_start).into();
            run_calendar(
                settings,
                catalog,
                year,
                month.saturating_sub(1),
                week_start,
                events.as_deref(),
                today,
            )
        }
        Command::Summary => {
            let design = catalog.get(settings.design)?;
            let summary = EstimateSummary::from_design(design);
            debug!(design = %design.id, paid_in_full = summary.paid_in_full, "built summary");
            Ok(render_summary(&summary))
        }
        Command::Designs => Ok(render_designs(catalog)),
    }
}

fn run_money(action: &MoneyCommand) -> String {
    match action {
        MoneyCommand::Format { inputs } => inputs
            .iter()
            .map(|input| format!("{}\n", format_money(input)))
            .collect(),
        MoneyCommand::Parse { inputs } => inputs
            .iter()
            .map(|input| format!("{}\n", parse_money(input)))
            .collect(),
        MoneyCommand::Sum { inputs } => format!("{}\n", format_amount(sum_money(inputs))),
    }
}

fn run_calendar(
    settings: &Settings,
    catalog: &DesignCatalog,
    year: i32,
    month0: i32,
    week_start: Weekday,
    extra_events: Option<&Path>,
    today: NaiveDate,
) -> anyhow::Result<String> {
    let grid = build_month_grid_with_week_start(year, month0, week_start)?;

    let design = catalog.get(settings.design)?;
    let mut events = design.schedule_events();
    if let Some(path) = extra_events {
        events.extend(load_events(path)?);
    }
    debug!(count = events.len(), "grouping schedule events");

    let by_day = group_by_day(&events);
    Ok(render_calendar(&grid, &by_day, Some(today)))
}

fn load_events(path: &Path) -> anyhow::Result<Vec<ScheduleEvent>> {
    let file =
        File::open(path).with_context(|| format!("failed to open events file {}", path.display()))?;
    let events = ScheduleCsvLoader::parse(file)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    info!(count = events.len(), path = %path.display(), "loaded extra events");
    Ok(events)
}
