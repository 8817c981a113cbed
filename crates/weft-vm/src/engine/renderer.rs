//! Operation-list execution.

use weft_core::{SafeString, escape_if_needed};
use weft_program::{CompiledTemplate, Op};

use super::context::EvaluationContext;
use super::error::RenderError;

/// The output stack: the root buffer plus any open capture buffers.
struct Output {
    root: String,
    captures: Vec<(String, String)>,
}

impl Output {
    fn new() -> Self {
        Output {
            root: String::new(),
            captures: Vec::new(),
        }
    }

    /// The buffer currently receiving emits.
    fn buffer(&mut self) -> &mut String {
        match self.captures.last_mut() {
            Some((_, buf)) => buf,
            None => &mut self.root,
        }
    }
}

/// Execute a compiled template against an evaluation context.
///
/// The template is read-only and may be shared; all mutable state lives in
/// the context and the per-call output stack.
pub fn render(
    template: &CompiledTemplate,
    ctx: &mut dyn EvaluationContext,
) -> Result<String, RenderError> {
    let mut out = Output::new();

    for op in template.ops() {
        match op {
            Op::EmitLiteral(text) => out.buffer().push_str(text),
            Op::RunStatement(code) => ctx.run_statement(code)?,
            Op::EmitValue { escape, code } => {
                let value = ctx.eval_expression(code)?;
                if *escape {
                    // Safe values pass through unchanged, so content escaped
                    // by the injected helper is never escaped twice.
                    out.buffer().push_str(escape_if_needed(&value).as_str());
                } else {
                    out.buffer().push_str(value.as_str());
                }
            }
            Op::BeginCapture { var } => {
                out.captures.push((var.clone(), String::new()));
            }
            Op::EndCapture => {
                let (var, buf) = out.captures.pop().ok_or(RenderError::UnbalancedCapture)?;
                ctx.end_capture(&var, SafeString::wrap(buf))?;
            }
        }
    }

    if !out.captures.is_empty() {
        return Err(RenderError::UnbalancedCapture);
    }
    Ok(out.root)
}
