use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::WeekStart;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Roofing estimate toolkit.
///
/// Formats money strings, prints the schedule calendar, and summarizes the
/// canned estimate design sets.
#[derive(Debug, Parser)]
#[command(name = "estimate", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Design set to use (1, 2 or 3 in the bundled catalog).
    #[arg(long, global = true)]
    pub design: Option<u8>,

    /// TOML catalog to load instead of the bundled design sets.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// TOML config file with default settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse and format money strings.
    Money {
        #[command(subcommand)]
        action: MoneyCommand,
    },

    /// Print a month view with scheduled days marked.
    Calendar {
        /// Calendar year (defaults to the current year).
        #[arg(long, allow_hyphen_values = true)]
        year: Option<i32>,

        /// Month, 1-12 (defaults to the current month). Values outside the
        /// range roll over into neighbouring years.
        #[arg(long, allow_hyphen_values = true)]
        month: Option<i32>,

        /// Extra events to show, as a `date,title,kind` CSV file.
        #[arg(long)]
        events: Option<PathBuf>,

        /// First day of the week.
        #[arg(long, value_enum)]
        week_start: Option<WeekStart>,
    },

    /// Print the estimate summary of the selected design set.
    Summary,

    /// List the design sets in the catalog.
    Designs,
}

#[derive(Debug, Subcommand)]
pub enum MoneyCommand {
    /// Normalize each input to `$X,XXX.XX`.
    Format {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Print the numeric value of each input (0 when unparseable).
    Parse {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Print the formatted sum of all inputs.
    Sum {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_negative_money_inputs() {
        let cli = Cli::try_parse_from(["estimate", "money", "format", "-500", "$1,234.5"])
            .expect("valid arguments");

        let Command::Money {
            action: MoneyCommand::Format { inputs },
        } = cli.command
        else {
            panic!("expected money format, got {:?}", cli.command);
        };
        assert_eq!(inputs, vec!["-500", "$1,234.5"]);
    }

    #[test]
    fn parses_calendar_options_and_globals() {
        let cli = Cli::try_parse_from([
            "estimate",
            "calendar",
            "--year",
            "2026",
            "--month",
            "2",
            "--week-start",
            "monday",
            "--design",
            "3",
            "-vv",
        ])
        .expect("valid arguments");

        assert_eq!(cli.global.design, Some(3));
        assert_eq!(cli.global.verbose, 2);
        let Command::Calendar {
            year,
            month,
            week_start,
            events,
        } = cli.command
        else {
            panic!("expected calendar, got {:?}", cli.command);
        };
        assert_eq!(year, Some(2026));
        assert_eq!(month, Some(2));
        assert_eq!(week_start, Some(WeekStart::Monday));
        assert_eq!(events, None);
    }

    #[test]
    fn money_format_requires_input() {
        let result = Cli::try_parse_from(["estimate", "money", "format"]);

        assert!(result.is_err());
    }
}
