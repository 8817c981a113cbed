//! The immutable compiled template container.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::op::Op;

/// Structural defects in a generated program.
///
/// These indicate a compiler bug, not a user-facing template error; the
/// compiler runs [`CompiledTemplate::verify`] before handing a template out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    #[error("capture ended at op {index} without a matching begin")]
    UnexpectedCaptureEnd { index: usize },

    #[error("{count} capture(s) left open at end of program")]
    UnclosedCapture { count: usize },
}

/// An ordered sequence of buffer operations.
///
/// Immutable once built and safe to execute concurrently from many threads,
/// each render owning its own buffers and evaluation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledTemplate {
    ops: Vec<Op>,
}

impl CompiledTemplate {
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Check capture begin/end balance.
    pub fn verify(&self) -> Result<(), ProgramError> {
        let mut depth: usize = 0;
        for (index, op) in self.ops.iter().enumerate() {
            match op {
                Op::BeginCapture { .. } => depth += 1,
                Op::EndCapture => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(ProgramError::UnexpectedCaptureEnd { index })?;
                }
                _ => {}
            }
        }
        if depth > 0 {
            return Err(ProgramError::UnclosedCapture { count: depth });
        }
        Ok(())
    }

    /// Human-readable program listing, one operation per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                Op::EmitLiteral(text) => writeln!(out, "literal {text:?}"),
                Op::RunStatement(code) => writeln!(out, "stmt    {code}"),
                Op::EmitValue { escape: true, code } => writeln!(out, "value   escape {code}"),
                Op::EmitValue {
                    escape: false,
                    code,
                } => writeln!(out, "value   raw    {code}"),
                Op::BeginCapture { var } => writeln!(out, "capture begin  {var}"),
                Op::EndCapture => writeln!(out, "capture end"),
            }
            .expect("String write never fails");
        }
        out
    }
}
