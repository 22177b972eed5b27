//! Source-location types shared by the scanner, parser, and diagnostics.
//!
//! This crate provides [`SourceSpan`], the line/column location descriptor
//! attached to tokens, AST nodes, and diagnostics. Diagnostics carry spans
//! through unchanged; only the parser interprets them.

#![warn(missing_docs)]

pub mod span;

pub use span::SourceSpan;
