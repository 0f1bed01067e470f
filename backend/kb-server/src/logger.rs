//! Global fern logger: stdout (colored or plain) or an append-only file.
//!
//! Every line reads `[<rfc3339> - LEVEL] message [file:line]`.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use kb_config::LoggingConfig;
use log::{LevelFilter, Record, info};

/// Install the process-wide logger. A `log_file` replaces stdout and is never colored.
pub fn initialize(config: &LoggingConfig, log_file: Option<&Path>) -> ServerErrorResult<()> {
    let level = LevelFilter::from(config.level);

    let output = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("cannot open log file {}: {e}", path.display()),
                })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, None))
                .chain(file)
        }
        None => {
            let colors = config.colored.then(level_colors);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.as_ref())
                })
                .chain(std::io::stdout())
        }
    };

    Dispatch::new()
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("logger already installed: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {level} to {}", path.display()),
        None => info!("Logging at {level} to stdout"),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    let stamp = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{stamp} - {}] {message} [{file}:{line}]",
            colors.color(record.level())
        )),
        None => out.finish(format_args!(
            "[{stamp} - {}] {message} [{file}:{line}]",
            record.level()
        )),
    }
}
