//! The buffer operation set.

use serde::{Deserialize, Serialize};

/// One step of a compiled template program.
///
/// Executing the operation list in order against a fresh output buffer and a
/// caller-supplied evaluation context produces the rendered string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Append literal text to the current buffer.
    EmitLiteral(String),
    /// Run a code fragment for side effect; produces no output itself.
    RunStatement(String),
    /// Evaluate a code fragment and append its value to the current buffer.
    /// `escape` selects the escaped-by-default tag over the explicit opt-out.
    EmitValue { escape: bool, code: String },
    /// Redirect subsequent emits into a fresh buffer named `var`.
    BeginCapture { var: String },
    /// Close the innermost capture buffer and hand its content to the context.
    EndCapture,
}

impl Op {
    pub fn literal(text: impl Into<String>) -> Self {
        Op::EmitLiteral(text.into())
    }

    pub fn statement(code: impl Into<String>) -> Self {
        Op::RunStatement(code.into())
    }

    pub fn value(escape: bool, code: impl Into<String>) -> Self {
        Op::EmitValue {
            escape,
            code: code.into(),
        }
    }
}
