#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Weft: ERB-style embedded templates with escaped-by-default output.
//!
//! # Example
//!
//! ```
//! use weft_lib::{Bindings, compile, render};
//!
//! let template = compile("Hello, <%= name %>!").unwrap();
//! let mut ctx = Bindings::new();
//! ctx.set("name", "<World>");
//! assert_eq!(render(&template, &mut ctx).unwrap(), "Hello, &lt;World&gt;!");
//! ```

pub mod locator;
pub mod templates;

#[cfg(test)]
mod locator_tests;

pub use weft_compiler::{Engine, SyntaxError, SyntaxErrorKind, SyntaxErrorPrinter, compile};
pub use weft_core::{SafeString, Value, escape_html};
pub use weft_program::{CompiledTemplate, Op};
pub use weft_vm::{Bindings, EvaluationContext, RenderError, render};

pub use locator::{LocateError, Locator};
pub use templates::Templates;

/// Errors from the file-backed template workflow.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] weft_compiler::Error),

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error("failed to read template `{path}`: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, Error>;
