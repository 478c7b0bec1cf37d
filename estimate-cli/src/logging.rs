use std::io::{self, IsTerminal};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    registry::LookupSpan,
};

// --- Formatter ---

/// Level plus message, no timestamps or targets, so diagnostics stay short
/// next to the command's own output.
struct CliFmt;

impl<S, N> FormatEvent<S, N> for CliFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();

        let (pre, post) = if writer.has_ansi_escapes() {
            match level {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{pre}{level:>5}{post} ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Builds the filter: `RUST_LOG` when set, otherwise `default_level`.
///
/// An invalid `default_level` falls back to `warn`.
pub fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initializes logging to stderr. Call once at startup.
///
/// - Colored when stderr is a terminal, plain when redirected.
/// - Level: `RUST_LOG` if set, otherwise `default_level`.
///
/// A second call is a no-op.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(default_level))
        .with_ansi(io::stderr().is_terminal())
        .event_format(CliFmt)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging("debug");
        init_logging("info");
    }

    #[test]
    fn invalid_level_falls_back() {
        let filter = make_filter("=[not a filter");

        assert!(!filter.to_string().is_empty());
    }
}
