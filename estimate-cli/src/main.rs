use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::debug;

use estimate_cli::app;
use estimate_cli::cli::Cli;
use estimate_cli::config::Settings;
use estimate_cli::logging::init_logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.global).context("failed to load settings")?;
    init_logging(&settings.log_level);
    debug!(?settings, "resolved settings");

    let catalog = app::load_catalog(&settings)?;
    let today = Local::now().date_naive();

    let output = app::execute(&cli.command, &settings, &catalog, today)?;
    print!("{output}");

    Ok(())
}
