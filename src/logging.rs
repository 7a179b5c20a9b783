#![cfg(feature = "std")]

//! Stderr log sink for the binaries. The board and prompts own stdout.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable naming the log level.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw setting such as `debug` or `off`; `warn` when the setting
/// is missing or unrecognised.
pub fn parse_level(setting: Option<&str>) -> LevelFilter {
    setting
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Level named by `SEABATTLE_LOG`.
pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LOG_ENV).ok().as_deref())
}

/// Install the stderr logger. Later calls keep the first logger.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
