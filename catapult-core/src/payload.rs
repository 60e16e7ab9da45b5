//! The payload: read the primary input, mark it as processed, write it out.

use crate::error::CoreResult;
use crate::logging::Logger;

use std::io::{Read, Write};

/// Marker appended, on its own line, to every processed input.
pub const MARKER: &str = "PROCESSED.";

/// Counters from one payload run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadStats {
    pub bytes_read: usize,
    pub lines_read: usize,
    pub bytes_written: usize,
}

/// Appends the marker to `input` on a new line.
#[must_use]
pub fn process(input: &str) -> String {
    format!("{input}\n{MARKER}")
}

/// Reads all of `reader`, processes it and writes the result to `writer`.
///
/// # Arguments
///
/// * `reader` - The primary input, read to the end
/// * `writer` - Receives the processed text and is flushed before returning
/// * `logger` - Receives the line count and completion messages at INFO
///
/// # Returns
///
/// * `Ok(PayloadStats)` - Byte and line counts for the run
/// * `Err(CoreError::Io)` - If reading or writing fails
/// * `Err(CoreError::Encoding)` - If the input is not valid UTF-8
pub fn run_payload<R, W>(mut reader: R, mut writer: W, logger: &Logger) -> CoreResult<PayloadStats>
where
    R: Read,
    W: Write,
{
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let input = String::from_utf8(raw)?;

    let lines_read = input.lines().count();
    logger.info(format_args!("Processed {} lines.", lines_read));

    let output = process(&input);
    writer.write_all(output.as_bytes())?;
    writer.flush()?;

    logger.info("Complete.");

    Ok(PayloadStats {
        bytes_read: input.len(),
        lines_read,
        bytes_written: output.len(),
    })
}
