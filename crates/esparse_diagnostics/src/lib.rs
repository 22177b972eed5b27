//! Diagnostic classification, deduplication, and dispatch for the parser.
//!
//! This crate provides the [`ErrorSink`] that the scanner and parser drive
//! while processing source text: it classifies each [`ErrorKind`] through a
//! fixed [`Severity`] table, suppresses repeated undeclared-symbol reports
//! for the same name, emits a normalized [`DiagnosticEvent`] to the
//! host-registered observer, and tells the caller whether parsing may
//! continue. [`DiagnosticCollector`] batches events for post-parse
//! inspection, and [`DiagnosticRenderer`] implementations format them for
//! terminal or JSON output.

#![warn(missing_docs)]

pub mod abort;
pub mod code;
pub mod collector;
pub mod event;
pub mod kind;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use abort::ParseAbort;
pub use code::DiagnosticCode;
pub use collector::DiagnosticCollector;
pub use event::{DiagnosticEvent, DiagnosticRecord};
pub use kind::ErrorKind;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::{severity_label, Severity};
pub use sink::ErrorSink;
