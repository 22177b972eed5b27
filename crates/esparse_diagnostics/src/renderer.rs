//! Rendering backends for human-readable and machine-readable output.

use crate::event::DiagnosticEvent;

/// Trait for rendering diagnostic events into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single event into a formatted string.
    fn render(&self, event: &DiagnosticEvent) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[JS1135]: variable has not been declared
///   --> 3:7
///    = note: the programmer probably did not intend to do this
///    = help: https://esparse.dev/errors/JS1135
/// ```
pub struct TerminalRenderer;

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, event: &DiagnosticEvent) -> String {
        let mut out = String::new();

        // Header line: severity[CODE]: message
        let heading = if event.is_error { "error" } else { "warning" };
        out.push_str(&format!("{heading}[{}]: {}\n", event.code, event.message));

        if !event.span.is_dummy() {
            out.push_str(&format!("  --> {}\n", event.span));
        }

        out.push_str(&format!("   = note: {}\n", event.severity_label));
        out.push_str(&format!("   = help: {}\n", event.help_link));
        out
    }
}

/// Renders each diagnostic event as one JSON object.
///
/// The object layout matches the serde shape of [`DiagnosticEvent`], so
/// machine consumers can parse renderer output and the raw event stream
/// interchangeably.
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, event: &DiagnosticEvent) -> String {
        serde_json::to_string(event).expect("diagnostic event serializes to JSON")
    }
}
