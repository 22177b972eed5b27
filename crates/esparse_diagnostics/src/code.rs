//! Diagnostic codes pairing the fixed `JS` prefix with a numeric identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A diagnostic code: the fixed `JS` prefix followed by a numeric identifier.
///
/// Displayed as `JS` plus the bare integer, e.g. `JS42`, `JS1135`. The
/// rendering is locale-invariant (ASCII digits, no grouping separators);
/// hosts parse these codes back, so the format is frozen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The numeric identifier of the error kind.
    pub number: u32,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(number: u32) -> Self {
        Self { number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JS{}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", DiagnosticCode::new(42)), "JS42");
        assert_eq!(format!("{}", DiagnosticCode::new(1135)), "JS1135");
    }

    #[test]
    fn no_padding_or_grouping() {
        assert_eq!(format!("{}", DiagnosticCode::new(7)), "JS7");
        assert_eq!(format!("{}", DiagnosticCode::new(1000000)), "JS1000000");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::new(1050);
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
