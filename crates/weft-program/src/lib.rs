#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compiled template program format for Weft.
//!
//! A compiled template is an ordered list of buffer operations produced once
//! per source template and reusable across renders. This crate defines the
//! operation set, the immutable [`CompiledTemplate`] container, structural
//! verification, and a human-readable dump for tests and debugging.

mod op;
mod template;


pub use op::Op;
pub use template::{CompiledTemplate, ProgramError};
