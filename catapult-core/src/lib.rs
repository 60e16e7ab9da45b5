//! Core library for the Catapult command-line template.
//!
//! This crate provides file-path discovery, a severity-ranked logger that is
//! passed around explicitly, and the template payload.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use catapult_core::{ConsoleStyle, Logger, Severity, collect_files, run_payload};
//!
//! let logger = Logger::builder("example")
//!     .console(Severity::Info, ConsoleStyle::Bare)
//!     .build();
//!
//! for file in collect_files(["src", "Cargo.toml"], true) {
//!     logger.status(file.display());
//! }
//!
//! let stats = run_payload(std::io::stdin(), std::io::stdout(), &logger).unwrap();
//! logger.debug(format_args!("{stats:?}"));
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod payload;
pub mod utils;

// Re-exports for public API
pub use config::CatapultConfig;
pub use discovery::{Discovery, FileDiscovery, SkippedEntry, collect_files};
pub use error::{CoreError, CoreResult};
pub use logging::{ConsoleStyle, Logger, LoggerBuilder, Severity};
pub use payload::{MARKER, PayloadStats, process, run_payload};
pub use utils::partition;
