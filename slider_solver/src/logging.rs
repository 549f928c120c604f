use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable read by [`init_logging`] when no level is given.
pub const LOG_ENV_VAR: &str = "SLIDER_SOLVER_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolves the log level: an explicit `level` wins, then the
/// `SLIDER_SOLVER_LOG` environment variable, then `warn`.
pub fn resolve_level(level: Option<LevelFilter>) -> LevelFilter {
    level
        .or_else(|| env::var(LOG_ENV_VAR).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Installs the stderr logger. Stdout stays reserved for puzzle output.
///
/// Calling this more than once keeps the first logger and only updates the level.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = resolve_level(level);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
