//! Diagnostic severity levels and their display labels.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The severity level of a diagnostic, ordered from most to least severe.
///
/// Raw values 0 through 4 carry fixed meanings; severities below 2 are always
/// presented as hard errors, the rest as lesser diagnostics unless the caller
/// forces error status.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// There will be a run-time error if this code executes.
    RuntimeError,
    /// The programmer probably did not intend to do this.
    LikelyMistake,
    /// This can lead to problems in the future.
    FutureProblem,
    /// This can lead to performance problems.
    Performance,
    /// Purely stylistic; the code is just not right.
    Cosmetic,
}

impl Severity {
    /// Converts a raw severity value into a known level.
    ///
    /// Returns `None` for values outside 0..=4; such values are still
    /// renderable via [`severity_label`].
    pub fn from_raw(raw: i32) -> Option<Severity> {
        match raw {
            0 => Some(Severity::RuntimeError),
            1 => Some(Severity::LikelyMistake),
            2 => Some(Severity::FutureProblem),
            3 => Some(Severity::Performance),
            4 => Some(Severity::Cosmetic),
            _ => None,
        }
    }

    /// Returns the raw severity value (0..=4).
    pub fn as_raw(self) -> i32 {
        match self {
            Severity::RuntimeError => 0,
            Severity::LikelyMistake => 1,
            Severity::FutureProblem => 2,
            Severity::Performance => 3,
            Severity::Cosmetic => 4,
        }
    }

    /// Returns `true` if diagnostics at this level are always presented as
    /// errors (severities 0 and 1).
    pub fn is_error(self) -> bool {
        self.as_raw() < 2
    }

    /// Returns the fixed display label for this level.
    pub fn label(self) -> &'static str {
        match self {
            Severity::RuntimeError => "there will be a run-time error if this code executes",
            Severity::LikelyMistake => "the programmer probably did not intend to do this",
            Severity::FutureProblem => "this can lead to problems in the future",
            Severity::Performance => "this can lead to performance problems",
            Severity::Cosmetic => "this is just not right",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders the display label for a raw severity value.
///
/// Values 0..=4 render their fixed label from the closed table; any other
/// value renders through the fallback template carrying the raw number.
/// Downstream consumers parse these strings, so both the table and the
/// template are stable.
pub fn severity_label(raw: i32) -> Cow<'static, str> {
    match Severity::from_raw(raw) {
        Some(severity) => Cow::Borrowed(severity.label()),
        None => Cow::Owned(format!("unknown severity {raw}")),
    }
}
