//! The error type parsers unwind with when a diagnostic stops the parse.

use crate::code::DiagnosticCode;

/// Returned by [`ErrorSink::try_report`](crate::ErrorSink::try_report) when a
/// diagnostic does not permit the parse to continue.
///
/// Ordinary user-facing problems are diagnostics, not `Err`s; this type
/// exists only so parser code can propagate the stop decision with `?`
/// instead of threading the continue flag by hand.
#[derive(Debug, thiserror::Error)]
#[error("parsing stopped by unrecoverable error {code}")]
pub struct ParseAbort {
    /// The code of the diagnostic that stopped the parse.
    pub code: DiagnosticCode,
}

impl ParseAbort {
    /// Creates a new abort signal for the given diagnostic code.
    pub fn new(code: DiagnosticCode) -> Self {
        Self { code }
    }
}
