//! The seam between the renderer and the embedded language.

use weft_core::{SafeString, Value};

use super::error::RenderError;

/// Supplies meaning for the code fragments inside a template.
///
/// The renderer owns buffers and sequencing; the context owns evaluation.
/// A fresh context per render keeps compiled templates shareable across
/// threads.
pub trait EvaluationContext {
    /// Execute a statement fragment for side effect.
    fn run_statement(&mut self, code: &str) -> Result<(), RenderError>;

    /// Evaluate an expression fragment to a value.
    fn eval_expression(&mut self, code: &str) -> Result<Value, RenderError>;

    /// Receive the content of a finished capture buffer.
    ///
    /// Captured content was produced under the template's own escaping rules,
    /// so it arrives pre-marked as safe. The default does nothing; contexts
    /// that support block calls stash it for the closing statement.
    fn end_capture(&mut self, var: &str, content: SafeString) -> Result<(), RenderError> {
        let _ = (var, content);
        Ok(())
    }
}
