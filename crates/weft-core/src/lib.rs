#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data types shared by the Weft template compiler and runtime.
//!
//! Three concerns live here:
//! - the [`SafeString`] marker that distinguishes pre-escaped text from raw text
//! - [`Value`] and the HTML escaping rules built on top of the marker
//! - the runtime helper names the compiler injects into generated code fragments

pub mod escape;
pub mod runtime;
pub mod safe;
pub mod value;

pub use escape::{escape_html, escape_if_needed};
pub use safe::SafeString;
pub use value::Value;
