//! Command implementations for the CLI.
//!
//! A run either lists discovered files (when PATHS are given) or runs the
//! payload over the primary input. Both share the stream helpers below.

/// Lists the files implied by the PATHS arguments.
pub mod discover;
/// Reads the primary input, marks it processed and writes it out.
pub mod payload;

use crate::error::{CliResult, WithContext};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Opens the primary input, or stdin when no file was given.
pub fn open_input(path: Option<&Path>) -> CliResult<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| {
                format!("Failed to open input file '{}'", path.display())
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Opens the primary output, or stdout when no file was given.
pub fn open_output(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Failed to open output file '{}'", path.display())
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
