use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};

/// Environment variable selecting the maximum log level.
pub const LOG_LEVEL_ENV: &str = "LINEAR_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Writes log records to standard error so standard output only ever carries
/// decoding results or usage text.
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl StderrLogger {
    /// Call this once at startup.
    pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Format: "[LEVEL] target: message"
        // Failures writing to stderr are dropped; there is nowhere to report them.
        let _ = writeln!(
            io::stderr().lock(),
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        // best effort, same as log()
        let _ = io::stderr().flush();
    }
}

/// Level named by [`LOG_LEVEL_ENV`], or `warn` if unset or unrecognized.
pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}
