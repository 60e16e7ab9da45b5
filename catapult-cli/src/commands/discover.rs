//! Implementation of the file listing run.
//!
//! Runs file discovery over the PATHS arguments and writes one absolute path
//! per line to the primary output. A per-extension summary is logged.

use super::open_output;
use crate::error::{CliResult, WithContext};

use catapult_core::{CatapultConfig, Discovery, FileDiscovery, Logger, partition};

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Label used in the summary for files without an extension.
const NO_EXTENSION: &str = "(none)";

/// Lists the files implied by `config.paths`.
pub fn run_discover(config: &CatapultConfig, logger: &Logger) -> CliResult<Discovery> {
    let found = FileDiscovery::new(config.recurse).discover(&config.paths);

    for skipped in &found.skipped {
        logger.audit(format_args!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }

    let mut output = open_output(config.output.as_deref())?;
    write_listing(&mut output, &found.files).context("Failed to write file list")?;

    log_summary(&found.files, logger);
    Ok(found)
}

/// Writes one path per line, byte for byte, so names that are not valid
/// UTF-8 survive the listing.
fn write_listing(output: &mut dyn Write, files: &[PathBuf]) -> io::Result<()> {
    for file in files {
        output.write_all(file.as_os_str().as_encoded_bytes())?;
        output.write_all(b"\n")?;
    }
    output.flush()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

fn log_summary(files: &[PathBuf], logger: &Logger) {
    logger.info(format_args!("Found {} files.", files.len()));
    for (extension, group) in partition(files, |path| extension_of(path)) {
        logger.info(format_args!("  {}: {}", extension, group.len()));
    }
}
