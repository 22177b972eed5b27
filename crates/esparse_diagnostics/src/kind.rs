//! The catalog of error kinds the scanner and parser can report.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// An enumerated parse or semantic error condition.
///
/// Each kind carries a stable numeric id, a default [`Severity`], a fixed
/// message, and a recoverability flag. The catalog is open-ended: this is the
/// subset the front end currently reports, not an exhaustive taxonomy, and
/// ids stay stable as kinds are added.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Catch-all for malformed input with no more specific kind.
    SyntaxError,
    /// A `:` was required (e.g. in a ternary or object literal).
    ColonExpected,
    /// A `;` was required.
    SemicolonExpected,
    /// An identifier was required.
    IdentifierExpected,
    /// An expression was required.
    ExpressionExpected,
    /// A string literal ran past the end of its line or file.
    UnterminatedString,
    /// A block comment ran past the end of the file.
    UnterminatedComment,
    /// A numeric literal that does not scan as a number.
    BadNumericLiteral,
    /// Statement nesting exceeded the parser's depth limit.
    NestingTooDeep,
    /// The error budget for this parse was exhausted.
    TooManyErrors,
    /// An assignment where a comparison was probably intended.
    SuspectAssignment,
    /// A semicolon directly after a conditional, making its body empty.
    SuspectSemicolon,
    /// Use of the `with` statement.
    WithNotRecommended,
    /// A legacy octal literal.
    OctalLiteralsDeprecated,
    /// A variable referenced without a declaration in scope.
    UndeclaredVariable,
    /// A function called without a declaration in scope.
    UndeclaredFunction,
    /// A formal argument never referenced by its function body.
    ArgumentNotReferenced,
    /// A variable declared but never referenced.
    VariableNotReferenced,
}

impl ErrorKind {
    /// Every kind in the catalog, in id order.
    pub const ALL: [ErrorKind; 18] = [
        ErrorKind::SyntaxError,
        ErrorKind::ColonExpected,
        ErrorKind::SemicolonExpected,
        ErrorKind::IdentifierExpected,
        ErrorKind::ExpressionExpected,
        ErrorKind::UnterminatedString,
        ErrorKind::UnterminatedComment,
        ErrorKind::BadNumericLiteral,
        ErrorKind::NestingTooDeep,
        ErrorKind::TooManyErrors,
        ErrorKind::SuspectAssignment,
        ErrorKind::SuspectSemicolon,
        ErrorKind::WithNotRecommended,
        ErrorKind::OctalLiteralsDeprecated,
        ErrorKind::UndeclaredVariable,
        ErrorKind::UndeclaredFunction,
        ErrorKind::ArgumentNotReferenced,
        ErrorKind::VariableNotReferenced,
    ];

    /// Returns the stable numeric id of this kind.
    pub fn id(self) -> u32 {
        match self {
            ErrorKind::SyntaxError => 1002,
            ErrorKind::ColonExpected => 1003,
            ErrorKind::SemicolonExpected => 1004,
            ErrorKind::IdentifierExpected => 1010,
            ErrorKind::ExpressionExpected => 1014,
            ErrorKind::UnterminatedString => 1015,
            ErrorKind::UnterminatedComment => 1016,
            ErrorKind::BadNumericLiteral => 1023,
            ErrorKind::NestingTooDeep => 1041,
            ErrorKind::TooManyErrors => 1050,
            ErrorKind::SuspectAssignment => 1107,
            ErrorKind::SuspectSemicolon => 1108,
            ErrorKind::WithNotRecommended => 1109,
            ErrorKind::OctalLiteralsDeprecated => 1121,
            ErrorKind::UndeclaredVariable => 1135,
            ErrorKind::UndeclaredFunction => 1136,
            ErrorKind::ArgumentNotReferenced => 1203,
            ErrorKind::VariableNotReferenced => 1204,
        }
    }

    /// Looks up a kind by its numeric id.
    pub fn from_id(id: u32) -> Option<ErrorKind> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    /// Returns the diagnostic code for this kind.
    pub fn code(self) -> DiagnosticCode {
        DiagnosticCode::new(self.id())
    }

    /// Returns the default severity of this kind.
    ///
    /// The caller can force error presentation per report, but the default
    /// severity itself is fixed per kind.
    pub fn severity(self) -> Severity {
        match self {
            ErrorKind::SyntaxError
            | ErrorKind::ColonExpected
            | ErrorKind::SemicolonExpected
            | ErrorKind::IdentifierExpected
            | ErrorKind::ExpressionExpected
            | ErrorKind::UnterminatedString
            | ErrorKind::UnterminatedComment
            | ErrorKind::BadNumericLiteral
            | ErrorKind::NestingTooDeep
            | ErrorKind::TooManyErrors => Severity::RuntimeError,
            ErrorKind::SuspectAssignment
            | ErrorKind::SuspectSemicolon
            | ErrorKind::UndeclaredVariable
            | ErrorKind::UndeclaredFunction => Severity::LikelyMistake,
            ErrorKind::OctalLiteralsDeprecated => Severity::FutureProblem,
            ErrorKind::ArgumentNotReferenced | ErrorKind::VariableNotReferenced => {
                Severity::Performance
            }
            ErrorKind::WithNotRecommended => Severity::Cosmetic,
        }
    }

    /// Returns `true` if the parser may keep processing after reporting this
    /// kind.
    ///
    /// Intrinsic to the kind; forcing error presentation does not change it.
    pub fn can_recover(self) -> bool {
        !matches!(self, ErrorKind::NestingTooDeep | ErrorKind::TooManyErrors)
    }

    /// Returns the fixed message text for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "syntax error",
            ErrorKind::ColonExpected => "expected ':'",
            ErrorKind::SemicolonExpected => "expected ';'",
            ErrorKind::IdentifierExpected => "expected an identifier",
            ErrorKind::ExpressionExpected => "expected an expression",
            ErrorKind::UnterminatedString => "unterminated string constant",
            ErrorKind::UnterminatedComment => "unterminated comment",
            ErrorKind::BadNumericLiteral => "badly formed numeric literal",
            ErrorKind::NestingTooDeep => "statements are nested too deeply",
            ErrorKind::TooManyErrors => "too many errors",
            ErrorKind::SuspectAssignment => "suspect assignment",
            ErrorKind::SuspectSemicolon => "suspect semicolon",
            ErrorKind::WithNotRecommended => "'with' statement is not recommended",
            ErrorKind::OctalLiteralsDeprecated => "octal literals are deprecated",
            ErrorKind::UndeclaredVariable => "variable has not been declared",
            ErrorKind::UndeclaredFunction => "function has not been declared",
            ErrorKind::ArgumentNotReferenced => "argument is never referenced",
            ErrorKind::VariableNotReferenced => "variable is defined but never referenced",
        }
    }

    /// Returns the documentation link for this kind, derived from its code.
    pub fn help_link(self) -> String {
        format!("https://esparse.dev/errors/{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = ErrorKind::ALL.iter().map(|kind| kind.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn from_id_roundtrip() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ErrorKind::from_id(9999), None);
    }

    #[test]
    fn severities_cover_valid_range() {
        for kind in ErrorKind::ALL {
            let raw = kind.severity().as_raw();
            assert!((0..=4).contains(&raw), "{kind:?} has severity {raw}");
        }
    }

    #[test]
    fn undeclared_kinds() {
        assert_eq!(ErrorKind::UndeclaredVariable.id(), 1135);
        assert_eq!(ErrorKind::UndeclaredFunction.id(), 1136);
        assert_eq!(
            ErrorKind::UndeclaredVariable.severity(),
            Severity::LikelyMistake
        );
        assert!(ErrorKind::UndeclaredVariable.can_recover());
        assert!(ErrorKind::UndeclaredFunction.can_recover());
    }

    #[test]
    fn unrecoverable_kinds() {
        assert!(!ErrorKind::NestingTooDeep.can_recover());
        assert!(!ErrorKind::TooManyErrors.can_recover());
        let recoverable = ErrorKind::ALL.iter().filter(|kind| kind.can_recover());
        assert_eq!(recoverable.count(), ErrorKind::ALL.len() - 2);
    }

    #[test]
    fn code_uses_id() {
        assert_eq!(format!("{}", ErrorKind::TooManyErrors.code()), "JS1050");
    }

    #[test]
    fn help_link_embeds_code() {
        assert_eq!(
            ErrorKind::UndeclaredVariable.help_link(),
            "https://esparse.dev/errors/JS1135"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&ErrorKind::SuspectAssignment).unwrap();
        let back: ErrorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorKind::SuspectAssignment);
    }
}
