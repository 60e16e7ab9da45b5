// ============================================================================
// catapult-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and context for command failures
//
// Failures keep their cause: `with_context` wraps the underlying CoreError in
// CoreError::Context, so the report reads
// "Failed to open input file 'x': IO error: ..." while the original error
// stays reachable through `source()`.

use catapult_core::{CoreError, CoreResult};

/// Results of CLI operations.
pub type CliResult<T> = CoreResult<T>;

/// Attaches a description of the attempted operation to a failure.
pub trait WithContext<T> {
    /// Wraps the error with `context`.
    fn context(self, context: &str) -> CliResult<T>;

    /// Wraps the error with a message built only when there is an error.
    fn with_context<F>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> WithContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn context(self, context: &str) -> CliResult<T> {
        self.with_context(|| context.to_string())
    }

    fn with_context<F>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CoreError::context(e.into(), f()))
    }
}
