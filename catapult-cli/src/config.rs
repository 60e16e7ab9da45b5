// catapult-cli/src/config.rs
//
// Launch profiles: the per-binary defaults that distinguish `catapult` from
// `envy`. Everything else about the two binaries is shared.

use catapult_core::config::DEFAULT_FILE_SEVERITY;
use catapult_core::{ConsoleStyle, Severity};

/// Defaults that differ between the binaries built from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchProfile {
    /// Program name used when argv[0] has no usable file stem.
    pub name: &'static str,

    /// File log level used when `--log_level` is given without a value.
    pub flag_only_level: Severity,

    /// How console messages are rendered.
    pub console_style: ConsoleStyle,

    /// Severity of the startup lines (log level, log file, command, CWD, arguments).
    pub startup_severity: Severity,

    /// Whether to log "Program NAME running..." after the startup lines.
    pub announce: bool,
}

pub const CATAPULT: LaunchProfile = LaunchProfile {
    name: "catapult",
    flag_only_level: DEFAULT_FILE_SEVERITY,
    console_style: ConsoleStyle::Bare,
    startup_severity: Severity::Debug,
    announce: true,
};

pub const ENVY: LaunchProfile = LaunchProfile {
    name: "envy",
    flag_only_level: Severity::Info,
    console_style: ConsoleStyle::Labelled,
    startup_severity: Severity::Info,
    announce: false,
};
