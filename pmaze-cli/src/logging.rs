use std::{
    io::{self, Write as _},
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<CliLogger> = OnceLock::new();

pub fn get_logger() -> &'static CliLogger {
    LOGGER.get_or_init(|| CliLogger::new(LevelFilter::Warn))
}

/// Installs [`CliLogger`] as the global logger, showing records up to `level`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Raises `base` by `steps` levels, saturating at `Trace`.
pub fn raise(base: LevelFilter, steps: u8) -> LevelFilter {
    LevelFilter::iter()
        .skip_while(|&level| level != base)
        .nth(steps as usize)
        .unwrap_or(LevelFilter::Trace)
}

/// Writes records to stderr, keeping stdout free for the maze itself.
pub struct CliLogger {
    min_level: RwLock<LevelFilter>,
}

impl CliLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

fn format_line(level: Level, source: &str, message: &str) -> String {
    format!("{:<5} {} -> {}", level, source, message)
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            // nowhere left to report a failing stderr
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
