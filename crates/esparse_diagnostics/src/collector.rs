//! Accumulates dispatched diagnostics for inspection after a parse.

use crate::event::DiagnosticEvent;
use crate::sink::ErrorSink;
use std::cell::RefCell;
use std::rc::Rc;

/// A diagnostic accumulator attachable to an [`ErrorSink`].
///
/// Hosts that want the full batch of diagnostics after a parse, rather than
/// streaming them, attach a collector as the sink's diagnostic observer and
/// read it back once parsing finishes. Clones share the same storage, so the
/// handle kept by the host observes events captured by the clone held inside
/// the sink. Single-threaded, like the sink that feeds it.
#[derive(Clone, Default)]
pub struct DiagnosticCollector {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    events: Vec<DiagnosticEvent>,
    error_count: usize,
}

impl DiagnosticCollector {
    /// Creates a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers this collector as the sink's diagnostic observer.
    pub fn attach(&self, sink: &mut ErrorSink) {
        let inner = Rc::clone(&self.inner);
        sink.on_diagnostic(move |event| {
            let mut inner = inner.borrow_mut();
            if event.is_error {
                inner.error_count += 1;
            }
            inner.events.push(event.clone());
        });
    }

    /// Returns `true` if any error-status diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.inner.borrow().error_count > 0
    }

    /// Returns the number of error-status diagnostics collected so far.
    ///
    /// Counts presentation status (`is_error`), not severity: a forced-error
    /// report of a cosmetic kind counts.
    pub fn error_count(&self) -> usize {
        self.inner.borrow().error_count
    }

    /// Returns a snapshot of all collected events without draining.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.inner.borrow().events.clone()
    }

    /// Takes all collected events, leaving the collector empty.
    ///
    /// The error count is not reset; it tracks the whole session.
    pub fn take_all(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut self.inner.borrow_mut().events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ErrorKind;
    use esparse_source::SourceSpan;

    fn span() -> SourceSpan {
        SourceSpan::new(2, 1, 2, 4)
    }

    fn attached() -> (ErrorSink, DiagnosticCollector) {
        let mut sink = ErrorSink::new();
        let collector = DiagnosticCollector::new();
        collector.attach(&mut sink);
        (sink, collector)
    }

    #[test]
    fn empty_collector() {
        let collector = DiagnosticCollector::new();
        assert!(!collector.has_errors());
        assert_eq!(collector.error_count(), 0);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collects_dispatched_events() {
        let (mut sink, collector) = attached();
        sink.report(ErrorKind::SyntaxError, span());
        sink.report(ErrorKind::VariableNotReferenced, span());

        let events = collector.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].code, "JS1002");
        assert_eq!(events[1].code, "JS1204");
    }

    #[test]
    fn counts_only_error_status() {
        let (mut sink, collector) = attached();
        sink.report(ErrorKind::VariableNotReferenced, span());
        assert!(!collector.has_errors());

        sink.report_as_error(ErrorKind::VariableNotReferenced, span());
        sink.report(ErrorKind::UnterminatedString, span());
        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 2);
    }

    #[test]
    fn take_all_drains_events_but_not_count() {
        let (mut sink, collector) = attached();
        sink.report(ErrorKind::SyntaxError, span());
        assert_eq!(collector.take_all().len(), 1);
        assert!(collector.events().is_empty());
        assert_eq!(collector.error_count(), 1);
    }

    #[test]
    fn clones_share_storage() {
        let (mut sink, collector) = attached();
        let alias = collector.clone();
        sink.report(ErrorKind::SyntaxError, span());
        assert_eq!(alias.events().len(), 1);
    }
}
