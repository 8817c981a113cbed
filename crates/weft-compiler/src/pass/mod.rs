//! Semantics-preserving IR transformation passes.
//!
//! Pipeline order: `trim` (on the raw IR, while block boundaries are still
//! visible), `rewrite_blocks`, `inject_escaping`, then the two
//! simplification passes `flatten` and `merge`. All passes are total.

mod blocks;
mod escape;
mod simplify;
mod trim;

#[cfg(test)]
mod trim_tests;

pub use blocks::rewrite_blocks;
pub use escape::inject_escaping;
pub use simplify::{flatten, merge};
pub use trim::trim;
