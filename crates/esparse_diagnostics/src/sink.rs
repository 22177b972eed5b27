//! The error sink driven by the scanner and parser during one parse session.

use crate::abort::ParseAbort;
use crate::event::{DiagnosticEvent, DiagnosticRecord};
use crate::kind::ErrorKind;
use esparse_source::SourceSpan;
use std::collections::HashSet;

/// Receives raw error signals from the scanner and parser, classifies them,
/// and emits normalized [`DiagnosticEvent`]s to a host-registered observer.
///
/// One sink exists per parse session and is driven by a single parser on a
/// single thread; `&mut self` on every entry point enforces the exclusive
/// use. The sink never fails: every entry point completes normally and the
/// only control-flow signal is the returned continue decision.
///
/// A sink with no observer registered is a safe, silent null object.
#[derive(Default)]
pub struct ErrorSink {
    /// Undeclared-symbol names already reported this session. Monotonic;
    /// shared by the variable and function reporting paths.
    seen_names: HashSet<String>,
    diagnostic_observer: Option<Box<dyn FnMut(&DiagnosticEvent)>>,
    undeclared_observer: Option<Box<dyn FnMut(&str, SourceSpan)>>,
}

impl ErrorSink {
    /// Creates a new sink with no observers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the observer invoked with every dispatched diagnostic.
    ///
    /// Replaces any previously registered observer.
    pub fn on_diagnostic(&mut self, observer: impl FnMut(&DiagnosticEvent) + 'static) {
        self.diagnostic_observer = Some(Box::new(observer));
    }

    /// Registers the observer invoked for every undeclared-symbol reference.
    ///
    /// Unlike the reporting paths, these notifications are not deduplicated;
    /// the observer sees each reference. Replaces any previously registered
    /// observer.
    pub fn on_undeclared_reference(&mut self, observer: impl FnMut(&str, SourceSpan) + 'static) {
        self.undeclared_observer = Some(Box::new(observer));
    }

    /// Notifies the undeclared-reference observer of a symbol reference that
    /// did not resolve.
    pub fn undeclared_reference(&mut self, name: &str, span: SourceSpan) {
        if let Some(observer) = self.undeclared_observer.as_mut() {
            observer(name, span);
        }
    }

    /// Reports a reference to an undeclared variable.
    ///
    /// Emits an [`ErrorKind::UndeclaredVariable`] diagnostic the first time
    /// `name` is reported by this sink; subsequent reports for the same name
    /// are silent no-ops. The kind is recoverable, so no continue decision is
    /// returned.
    pub fn report_undeclared_variable(&mut self, name: &str, span: SourceSpan) {
        if self.first_sighting(name) {
            self.report(ErrorKind::UndeclaredVariable, span);
        }
    }

    /// Reports a call to an undeclared function.
    ///
    /// Shares the seen-name registry with
    /// [`report_undeclared_variable`](Self::report_undeclared_variable): the
    /// registry is keyed by name alone, so a name already reported through
    /// either path suppresses the other.
    pub fn report_undeclared_function(&mut self, name: &str, span: SourceSpan) {
        if self.first_sighting(name) {
            self.report(ErrorKind::UndeclaredFunction, span);
        }
    }

    /// Reports a diagnostic, deriving presentation from the kind's default
    /// severity.
    ///
    /// Returns `true` if the parser may continue past this diagnostic.
    pub fn report(&mut self, kind: ErrorKind, span: SourceSpan) -> bool {
        self.dispatch(DiagnosticRecord::new(kind, span))
    }

    /// Reports a diagnostic forced to error presentation.
    ///
    /// Forcing affects only how the diagnostic is presented; the returned
    /// continue decision is the same as for [`report`](Self::report).
    pub fn report_as_error(&mut self, kind: ErrorKind, span: SourceSpan) -> bool {
        self.dispatch(DiagnosticRecord::forced_error(kind, span))
    }

    /// Reports a diagnostic and converts a stop decision into an error.
    ///
    /// `Ok(())` means the parser may continue; `Err` carries the code of the
    /// diagnostic that stopped the parse, for `?`-style unwinding.
    pub fn try_report(&mut self, kind: ErrorKind, span: SourceSpan) -> Result<(), ParseAbort> {
        if self.report(kind, span) {
            Ok(())
        } else {
            Err(ParseAbort::new(kind.code()))
        }
    }

    /// Renders the record into its observer payload, notifies the diagnostic
    /// observer, and returns the continue decision.
    ///
    /// The single source of truth for whether the caller may keep parsing.
    fn dispatch(&mut self, record: DiagnosticRecord) -> bool {
        let event = DiagnosticEvent::from_record(&record);
        if let Some(observer) = self.diagnostic_observer.as_mut() {
            observer(&event);
        }
        record.can_recover
    }

    /// Records `name` as reported; returns `true` only the first time.
    fn first_sighting(&mut self, name: &str) -> bool {
        if self.seen_names.contains(name) {
            return false;
        }
        self.seen_names.insert(name.to_string());
        true
    }
}
