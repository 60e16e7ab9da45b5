//! Implementation of the payload run.
//!
//! Reads the whole primary input, appends the processed marker and writes the
//! result to the primary output.

use super::{open_input, open_output};
use crate::error::{CliResult, WithContext};

use catapult_core::{CatapultConfig, Logger, PayloadStats, run_payload};

/// Runs the payload between the configured input and output streams.
pub fn run_payload_command(config: &CatapultConfig, logger: &Logger) -> CliResult<PayloadStats> {
    let input = open_input(config.input.as_deref())?;
    let output = open_output(config.output.as_deref())?;

    let stats = run_payload(input, output, logger).context("Failed to process input")?;

    logger.debug(format_args!(
        "Read {} bytes, wrote {} bytes.",
        stats.bytes_read, stats.bytes_written
    ));
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_payload_between_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "hello")?;

        let config = CatapultConfig {
            input: Some(input),
            output: Some(output.clone()),
            ..CatapultConfig::default()
        };
        let stats = run_payload_command(&config, &Logger::silent())?;

        assert_eq!(fs::read_to_string(&output)?, "hello\nPROCESSED.");
        assert_eq!(stats.lines_read, 1);
        Ok(())
    }

    #[test]
    fn test_missing_input_names_the_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = CatapultConfig {
            input: Some(dir.path().join("missing.txt")),
            output: Some(dir.path().join("out.txt")),
            ..CatapultConfig::default()
        };

        let err = run_payload_command(&config, &Logger::silent()).unwrap_err();

        assert!(err.to_string().starts_with("Failed to open input file"));
        assert!(err.to_string().contains("missing.txt"));
        Ok(())
    }
}
