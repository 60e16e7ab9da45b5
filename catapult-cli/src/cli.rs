// catapult-cli/src/cli.rs
//
// Defines the command-line argument structure using clap and turns parsed
// arguments into a catapult-core configuration.

use crate::config::LaunchProfile;

use catapult_core::config::{
    CatapultConfig, DEFAULT_AUX_FILE, DEFAULT_CONSOLE_SEVERITY, ENV_LOG_DIR, ENV_LOG_LEVEL,
    get_env_severity,
};
use catapult_core::Severity;

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "A template for command-line tools",
    long_about = "A template for command-line tools. It assumes a primary input file, a primary \
                  output file, some optional files, and some flags. If either the primary input or \
                  output file is not specified, stdin and stdout are used. When PATHS are given, \
                  the files they contain are listed instead."
)]
pub struct Cli {
    /// The primary input file. If this option is not specified, STDIN is assumed.
    #[arg(short = 'i', long = "input", value_name = "FILE", conflicts_with = "paths")]
    pub input: Option<PathBuf>,

    /// The primary output file. If this option is not specified, STDOUT is assumed.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// An auxiliary, optional file.
    #[arg(short = 'a', long = "aux", value_name = "FILE", default_value = DEFAULT_AUX_FILE)]
    pub aux: PathBuf,

    /// An optional flag.
    #[arg(short = 'g', long = "gflag")]
    pub gflag: bool,

    /// Enable logging to a file, NAME_TIMESTAMP.log, at the level given
    /// (DEBUG, AUDIT, INFO, STATUS, WARNING, ERROR or CRITICAL). Without a
    /// level the file gets the program's default level and the console stays
    /// at INFO; with a level both use it.
    #[arg(
        short = 'l',
        long = "log_level",
        visible_alias = "log-level",
        value_name = "LOG_LEVEL",
        num_args = 0..=1,
        value_parser = parse_severity
    )]
    pub log_level: Option<Option<Severity>>,

    /// If this option is set, argv and the parsed arguments are printed first.
    #[arg(short = 't', long = "testing")]
    pub testing: bool,

    /// Directory for the log file (defaults to the current directory)
    #[arg(long = "log-dir", value_name = "DIR", env = ENV_LOG_DIR)]
    pub log_dir: Option<PathBuf>,

    /// Descend into subdirectories when listing PATHS.
    #[arg(short = 'r', long = "recurse")]
    pub recurse: bool,

    /// Files or directories to list instead of running the payload.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,
}

/// Parses a severity name for clap, case-insensitively.
pub fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse::<Severity>().map_err(|e| e.to_string())
}

/// Treats `-` as "use the standard stream".
fn stream_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| p.as_os_str() != "-")
}

impl Cli {
    /// Console and file thresholds implied by `--log_level` (or the
    /// environment when the option is absent).
    pub fn severities(&self, profile: &LaunchProfile) -> (Severity, Option<Severity>) {
        match self.log_level {
            Some(Some(level)) => (level, Some(level)),
            Some(None) => (DEFAULT_CONSOLE_SEVERITY, Some(profile.flag_only_level)),
            None => match get_env_severity(ENV_LOG_LEVEL) {
                Some(level) => (level, Some(level)),
                None => (DEFAULT_CONSOLE_SEVERITY, None),
            },
        }
    }

    /// Builds the run configuration for `profile`.
    pub fn to_config(&self, profile: &LaunchProfile) -> CatapultConfig {
        let defaults = CatapultConfig::default();
        let (console_severity, file_severity) = self.severities(profile);

        CatapultConfig {
            input: stream_path(self.input.clone()),
            output: stream_path(self.output.clone()),
            aux_file: self.aux.clone(),
            gflag: self.gflag,
            console_severity,
            file_severity,
            log_dir: self.log_dir.clone().unwrap_or(defaults.log_dir),
            paths: self.paths.clone(),
            recurse: self.recurse,
        }
    }
}
