#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime for executing compiled Weft template programs.
//!
//! The renderer walks a template's operation list against a caller-supplied
//! [`EvaluationContext`], which decides what the embedded code fragments
//! mean. [`Bindings`] is the built-in context: a small variable/helper store
//! that understands the fragment shapes the compiler emits.

pub mod engine;

pub use engine::{Bindings, EvaluationContext, Helper, RenderError, render};
