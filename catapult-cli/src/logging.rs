// ============================================================================
// catapult-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Build the run's Logger from the parsed arguments
//
// The console sink is always present and writes to stderr, so the payload's
// stdout stays clean. The file sink is added only when a log level was
// requested and writes NAME_YYYYMMDDTHHMMSS.log into the log directory.

use crate::cli::Cli;
use crate::config::LaunchProfile;
use crate::error::{CliResult, WithContext};

use catapult_core::{CatapultConfig, Logger};

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDDTHHMMSS".
///
/// # Example
/// ```
/// let stamp = catapult_cli::logging::get_timestamp();
/// assert_eq!(stamp.len(), 15);
/// assert_eq!(&stamp[8..9], "T");
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%dT%H%M%S").to_string()
}

/// Log file name for `script` started at `timestamp`.
pub fn log_file_name(script: &str, timestamp: &str) -> String {
    format!("{script}_{timestamp}.log")
}

/// Program name from argv[0]'s file stem, or `fallback` when there is none.
pub fn script_name(argv0: Option<&OsStr>, fallback: &str) -> String {
    argv0
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Builds the logger for a run. Returns the log file path when one was created.
pub fn configure_logging(
    config: &CatapultConfig,
    profile: &LaunchProfile,
    script: &str,
) -> CliResult<(Logger, Option<PathBuf>)> {
    let builder = Logger::builder(script).console(config.console_severity, profile.console_style);

    let Some(file_severity) = config.file_severity else {
        return Ok((builder.build(), None));
    };

    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create log directory '{}'", config.log_dir.display())
    })?;

    let log_path = config.log_dir.join(log_file_name(script, &get_timestamp()));
    let logger = builder.log_file(&log_path, file_severity)?.build();

    Ok((logger, Some(log_path)))
}

/// Records how the program was started, at the profile's startup severity.
pub fn log_startup(
    logger: &Logger,
    profile: &LaunchProfile,
    argv: &[String],
    cli: &Cli,
    log_path: Option<&Path>,
) {
    let severity = profile.startup_severity;
    if let Some(level) = logger.min_threshold() {
        logger.log(severity, format_args!("Logging enabled at level {}.", level));
    }
    if let Some(path) = log_path {
        logger.log(severity, format_args!("Log file: {}", path.display()));
    }
    logger.log(severity, format_args!("Command: {}", argv.join(" ")));
    match std::env::current_dir() {
        Ok(cwd) => logger.log(severity, format_args!("CWD: {}", cwd.display())),
        Err(e) => logger.warning(format_args!("CWD unavailable: {}", e)),
    }
    logger.log(severity, format_args!("{:?}", cli));
    if profile.announce {
        logger.info(format_args!("Program {} running...", logger.target()));
    }
}
