//! Diagnostic records built per report and the events handed to observers.

use crate::kind::ErrorKind;
use crate::severity::severity_label;
use esparse_source::SourceSpan;
use serde::{Deserialize, Serialize};

/// An immutable value describing one reported condition.
///
/// Built by the sink for every report and consumed by dispatch; records are
/// not retained after the observer has been notified.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiagnosticRecord {
    /// The condition being reported.
    pub kind: ErrorKind,
    /// Raw severity value, taken from the kind's default severity.
    pub severity: i32,
    /// Where in the source the condition was detected.
    pub span: SourceSpan,
    /// Whether this diagnostic is presented as a hard error.
    ///
    /// True when the caller forced error status or when the severity is
    /// below 2; orthogonal to [`can_recover`](Self::can_recover).
    pub is_error: bool,
    /// Whether the parser may continue past this diagnostic.
    pub can_recover: bool,
}

impl DiagnosticRecord {
    /// Creates a record with presentation derived from the kind's severity.
    pub fn new(kind: ErrorKind, span: SourceSpan) -> Self {
        Self::build(kind, span, false)
    }

    /// Creates a record forced to error presentation.
    ///
    /// Forcing changes only `is_error`; recoverability still comes from the
    /// kind.
    pub fn forced_error(kind: ErrorKind, span: SourceSpan) -> Self {
        Self::build(kind, span, true)
    }

    fn build(kind: ErrorKind, span: SourceSpan, force_error: bool) -> Self {
        let severity = kind.severity().as_raw();
        Self {
            kind,
            severity,
            span,
            is_error: force_error || severity < 2,
            can_recover: kind.can_recover(),
        }
    }
}

/// The read-only payload delivered to the diagnostic observer.
///
/// Everything a host needs to display or persist the diagnostic: the
/// presentation flag, raw severity plus its rendered label, the rendered
/// `JS`-prefixed code, a documentation link, the source span, and the
/// message text. This shape is the external contract; fields are only ever
/// added.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Whether the diagnostic is presented as a hard error.
    pub is_error: bool,
    /// Raw severity value (0..=4 for known levels).
    pub severity: i32,
    /// The rendered severity label.
    pub severity_label: String,
    /// The rendered diagnostic code, e.g. `JS1135`.
    pub code: String,
    /// Documentation link for this diagnostic.
    pub help_link: String,
    /// Where in the source the condition was detected.
    pub span: SourceSpan,
    /// The message text.
    pub message: String,
}

impl DiagnosticEvent {
    /// Renders a record into its observer payload.
    pub fn from_record(record: &DiagnosticRecord) -> Self {
        Self {
            is_error: record.is_error,
            severity: record.severity,
            severity_label: severity_label(record.severity).into_owned(),
            code: record.kind.code().to_string(),
            help_link: record.kind.help_link(),
            span: record.span,
            message: record.kind.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> SourceSpan {
        SourceSpan::new(3, 7, 3, 12)
    }

    #[test]
    fn low_severity_is_error_without_forcing() {
        let record = DiagnosticRecord::new(ErrorKind::SyntaxError, span());
        assert_eq!(record.severity, 0);
        assert!(record.is_error);

        let record = DiagnosticRecord::new(ErrorKind::UndeclaredVariable, span());
        assert_eq!(record.severity, 1);
        assert!(record.is_error);
    }

    #[test]
    fn high_severity_is_error_only_when_forced() {
        let record = DiagnosticRecord::new(ErrorKind::OctalLiteralsDeprecated, span());
        assert!(!record.is_error);

        let record = DiagnosticRecord::forced_error(ErrorKind::OctalLiteralsDeprecated, span());
        assert!(record.is_error);
    }

    #[test]
    fn forcing_never_clears_is_error() {
        for kind in ErrorKind::ALL {
            let forced = DiagnosticRecord::forced_error(kind, span());
            assert!(forced.is_error, "{kind:?}");
        }
    }

    #[test]
    fn forcing_never_changes_recoverability() {
        for kind in ErrorKind::ALL {
            let plain = DiagnosticRecord::new(kind, span());
            let forced = DiagnosticRecord::forced_error(kind, span());
            assert_eq!(plain.can_recover, forced.can_recover, "{kind:?}");
        }
    }

    #[test]
    fn event_renders_record() {
        let record = DiagnosticRecord::new(ErrorKind::UndeclaredFunction, span());
        let event = DiagnosticEvent::from_record(&record);
        assert!(event.is_error);
        assert_eq!(event.severity, 1);
        assert_eq!(
            event.severity_label,
            "the programmer probably did not intend to do this"
        );
        assert_eq!(event.code, "JS1136");
        assert_eq!(event.help_link, "https://esparse.dev/errors/JS1136");
        assert_eq!(event.span, span());
        assert_eq!(event.message, "function has not been declared");
    }

    #[test]
    fn event_passes_span_through_unchanged() {
        let odd_span = SourceSpan::new(12, 1, 40, 2);
        let record = DiagnosticRecord::new(ErrorKind::SemicolonExpected, odd_span);
        let event = DiagnosticEvent::from_record(&record);
        assert_eq!(event.span, odd_span);
    }

    #[test]
    fn serde_roundtrip() {
        let record = DiagnosticRecord::new(ErrorKind::SuspectSemicolon, span());
        let event = DiagnosticEvent::from_record(&record);
        let json = serde_json::to_string(&event).unwrap();
        let back: DiagnosticEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
