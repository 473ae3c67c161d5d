//! Error Manager
//! Centralizes error reporting: the user sees the message, the log sees the details

use crate::error::{EditError, ErrorSeverity};
use std::io::{self, Write};

/// Reports errors to the user and keeps a tally for the session log
#[derive(Debug, Default)]
pub struct ErrorManager {
    /// Number of reports at Error severity or above
    errors: usize,
    /// Number of reports at Warning severity
    warnings: usize,
}

impl ErrorManager {
    /// Create a new error manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the error's message as a single line on `out` and log it
    pub fn handle<W: Write>(&mut self, err: &EditError, out: &mut W) -> io::Result<()> {
        match err.severity {
            ErrorSeverity::Error => {
                self.errors += 1;
                tracing::warn!(code = %err.code, kind = %err.kind, "{}", err.message);
            }
            ErrorSeverity::Warning => {
                self.warnings += 1;
                tracing::warn!(code = %err.code, kind = %err.kind, "{}", err.message);
            }
            ErrorSeverity::Info => {
                tracing::info!(code = %err.code, "{}", err.message);
            }
        }
        writeln!(out, "{}", err.message)
    }

    /// Number of errors reported so far
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of warnings reported so far
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings
    }
}
