#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Weft template compiler: scanner, IR passes, and code generator.
//!
//! The pipeline turns an ERB-style template source into an executable
//! operation list:
//!
//! - `parse` - logos scanner and recursive-descent parser producing the IR
//! - `pass` - block-capture rewriting, whitespace trimming, escape injection,
//!   and IR simplification
//! - `emit` - buffer operation emission
//! - `diagnostics` - span-based syntax errors with annotated snippets
//!
//! Compilation is pure and synchronous: no I/O, no shared state, safe to run
//! on any thread.

pub mod diagnostics;
pub mod emit;
pub mod engine;
pub mod ir;
pub mod parse;
pub mod pass;

pub use diagnostics::{Span, SyntaxError, SyntaxErrorKind, SyntaxErrorPrinter};
pub use engine::{Engine, compile};
pub use ir::Node;

/// Errors that can occur while compiling a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The generated program failed structural verification. This indicates
    /// a compiler defect rather than a malformed template.
    #[error("generated program failed verification: {0}")]
    Verify(#[from] weft_program::ProgramError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
