//! Configuration defaults and environment overrides.
//!
//! The CLI fills a [`CatapultConfig`] from its arguments; anything the user
//! did not pass falls back to the environment and then to the constants below.

use crate::logging::Severity;

use std::path::PathBuf;

/// Default path of the auxiliary file.
pub const DEFAULT_AUX_FILE: &str = "aux_file.txt";

/// Console threshold when no log level was requested.
pub const DEFAULT_CONSOLE_SEVERITY: Severity = Severity::Info;

/// File threshold when `--log_level` is given without a value.
pub const DEFAULT_FILE_SEVERITY: Severity = Severity::Debug;

/// Environment variable overriding the directory that receives log files.
pub const ENV_LOG_DIR: &str = "CATAPULT_LOG_DIR";

/// Environment variable supplying a log level when none is passed.
pub const ENV_LOG_LEVEL: &str = "CATAPULT_LOG_LEVEL";

/// Get a path value from an environment variable or use the default
pub fn get_env_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var(key).map(PathBuf::from).unwrap_or(default)
}

/// Get a severity from an environment variable, ignoring unparsable values.
pub fn get_env_severity(key: &str) -> Option<Severity> {
    std::env::var(key).ok().and_then(|val| val.parse().ok())
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct CatapultConfig {
    /// Primary input file; `None` reads stdin.
    pub input: Option<PathBuf>,

    /// Primary output file; `None` writes stdout.
    pub output: Option<PathBuf>,

    /// Auxiliary, optional file.
    pub aux_file: PathBuf,

    /// General-purpose flag passed through to the payload.
    pub gflag: bool,

    /// Threshold of the console sink.
    pub console_severity: Severity,

    /// Threshold of the log file sink; `None` disables the log file.
    pub file_severity: Option<Severity>,

    /// Directory receiving the log file.
    pub log_dir: PathBuf,

    /// Paths to run file discovery on instead of the payload.
    pub paths: Vec<String>,

    /// Whether discovery descends into subdirectories.
    pub recurse: bool,
}

impl Default for CatapultConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            aux_file: PathBuf::from(DEFAULT_AUX_FILE),
            gflag: false,
            console_severity: DEFAULT_CONSOLE_SEVERITY,
            file_severity: None,
            log_dir: get_env_path(ENV_LOG_DIR, PathBuf::from(".")),
            paths: Vec::new(),
            recurse: false,
        }
    }
}

impl CatapultConfig {
    /// Whether this run lists discovered files rather than running the payload.
    pub fn is_discovery(&self) -> bool {
        !self.paths.is_empty()
    }
}
