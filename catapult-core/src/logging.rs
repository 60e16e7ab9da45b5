//! Severity levels and the explicit logger object.
//!
//! A [`Logger`] owns a set of sinks, each with its own [`Severity`]
//! threshold. Sinks are `fern` dispatch chains converted into plain
//! `log::Log` values with `Dispatch::into_log`, so nothing is registered with
//! the global `log` facade. Components that log take a `&Logger`.
//!
//! Every record carries its severity name under the [`SEVERITY_KEY`]
//! key-value, because several severities share one `log::Level`.

use crate::error::{CoreError, CoreResult};

use log::kv::Key;
use log::{Level, LevelFilter, Log, Record};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Key under which each record carries its severity name.
pub const SEVERITY_KEY: &str = "severity";

/// Timestamp format used by file sinks (month-day hour:minute).
pub const FILE_DATE_FORMAT: &str = "%m-%d %H:%M";

/// Ranked message categories, lowest first.
///
/// The discriminant is the numeric rank used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 10,
    Audit = 15,
    Info = 20,
    Status = 25,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    /// All severities in ascending rank.
    pub const ALL: [Severity; 7] = [
        Severity::Debug,
        Severity::Audit,
        Severity::Info,
        Severity::Status,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Audit => "AUDIT",
            Severity::Info => "INFO",
            Severity::Status => "STATUS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// The closest `log::Level`, used on the records handed to sinks.
    #[must_use]
    pub fn as_log_level(self) -> Level {
        match self {
            Severity::Debug | Severity::Audit => Level::Debug,
            Severity::Info | Severity::Status => Level::Info,
            Severity::Warning => Level::Warn,
            Severity::Error | Severity::Critical => Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        if wanted == "WARN" {
            return Ok(Severity::Warning);
        }
        Severity::ALL
            .into_iter()
            .find(|severity| severity.name() == wanted)
            .ok_or_else(|| CoreError::InvalidSeverity(s.to_string()))
    }
}

/// How a console sink renders each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStyle {
    /// Message text only.
    Bare,
    /// `LEVEL   : message`
    Labelled,
}

/// Reads the severity name back out of a record, falling back to its level.
fn severity_label(record: &Record<'_>) -> String {
    record
        .key_values()
        .get(Key::from_str(SEVERITY_KEY))
        .map(|value| value.to_string())
        .unwrap_or_else(|| record.level().to_string())
}

/// Dispatch that formats records the way console sinks print them.
#[must_use]
pub fn console_dispatch(style: ConsoleStyle) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(move |out, message, record| match style {
            ConsoleStyle::Bare => out.finish(format_args!("{}", message)),
            ConsoleStyle::Labelled => {
                out.finish(format_args!("{:<8}: {}", severity_label(record), message))
            }
        })
        .level(LevelFilter::Trace)
}

/// Dispatch that formats records the way log files store them:
/// `MM-DD HH:MM target LEVEL message`.
#[must_use]
pub fn file_dispatch() -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<12} {:<8} {}",
                chrono::Local::now().format(FILE_DATE_FORMAT),
                record.target(),
                severity_label(record),
                message
            ))
        })
        .level(LevelFilter::Trace)
}

struct Sink {
    threshold: Severity,
    log: Box<dyn Log>,
}

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    target: String,
    sinks: Vec<Sink>,
}

impl LoggerBuilder {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            sinks: Vec::new(),
        }
    }

    /// Adds a sink built from an arbitrary fern dispatch.
    ///
    /// The dispatch should not filter by level itself; the threshold given
    /// here decides what reaches it.
    pub fn sink(mut self, threshold: Severity, dispatch: fern::Dispatch) -> Self {
        let (_, log) = dispatch.into_log();
        self.sinks.push(Sink { threshold, log });
        self
    }

    /// Adds a sink writing to stderr.
    pub fn console(self, threshold: Severity, style: ConsoleStyle) -> Self {
        self.sink(threshold, console_dispatch(style).chain(std::io::stderr()))
    }

    /// Adds a sink appending to the file at `path`, creating it if needed.
    pub fn log_file(self, path: &Path, threshold: Severity) -> CoreResult<Self> {
        let file = fern::log_file(path).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create log file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(self.sink(threshold, file_dispatch().chain(file)))
    }

    pub fn build(self) -> Logger {
        Logger {
            target: self.target,
            sinks: self.sinks,
        }
    }
}

/// Explicit logger handed to the components that report progress.
pub struct Logger {
    target: String,
    sinks: Vec<Sink>,
}

impl Logger {
    pub fn builder(target: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(target)
    }

    /// A logger without sinks; every message is dropped.
    pub fn silent() -> Self {
        LoggerBuilder::new("catapult").build()
    }

    /// Name recorded as the target of every message.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether at least one sink would record a message of `severity`.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.sinks.iter().any(|sink| severity >= sink.threshold)
    }

    /// The lowest threshold over all sinks, if there are any.
    pub fn min_threshold(&self) -> Option<Severity> {
        self.sinks.iter().map(|sink| sink.threshold).min()
    }

    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        for sink in self.sinks.iter().filter(|sink| severity >= sink.threshold) {
            sink.log.log(
                &Record::builder()
                    .args(format_args!("{}", message))
                    .level(severity.as_log_level())
                    .target(&self.target)
                    .key_values(&(SEVERITY_KEY, severity.name()))
                    .build(),
            );
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    pub fn audit(&self, message: impl fmt::Display) {
        self.log(Severity::Audit, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    pub fn status(&self, message: impl fmt::Display) {
        self.log(Severity::Status, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, message);
    }

    pub fn flush(&self) {
        for sink in &self.sinks {
            sink.log.flush();
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let thresholds: Vec<Severity> = self.sinks.iter().map(|sink| sink.threshold).collect();
        f.debug_struct("Logger")
            .field("target", &self.target)
            .field("thresholds", &thresholds)
            .finish()
    }
}
