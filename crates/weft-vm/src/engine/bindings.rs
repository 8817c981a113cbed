//! The built-in evaluation context: a variable and helper store that
//! interprets the fragment shapes the compiler emits.
//!
//! Supported statements: blank fragments, `name = expression` assignments,
//! `name = helper do`/`{` block-call openers, and the matching `end`/`}`
//! terminator. Supported expressions: the runtime escape and safe helpers,
//! double-quoted string literals, and variable references. Anything else is
//! reported as unsupported rather than guessed at.

use indexmap::IndexMap;
use weft_core::runtime::{ESCAPE_HELPER, SAFE_HELPER, helper_call};
use weft_core::{SafeString, Value, escape_if_needed};

use super::context::EvaluationContext;
use super::error::RenderError;

/// A block helper: receives the captured body, returns the block's value.
pub type Helper = Box<dyn Fn(SafeString) -> Value + Send + Sync>;

/// A block call whose body is still being captured.
struct PendingCall {
    var: String,
    helper: String,
}

/// Variable and helper bindings for rendering.
#[derive(Default)]
pub struct Bindings {
    vars: IndexMap<String, Value>,
    helpers: IndexMap<String, Helper>,
    pending: Vec<PendingCall>,
    captured: Vec<SafeString>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable. Raw values are escaped on output, safe values pass
    /// through; see [`Value`].
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Register a block helper invoked by `name = helper do ... end`.
    pub fn helper(
        &mut self,
        name: impl Into<String>,
        helper: impl Fn(SafeString) -> Value + Send + Sync + 'static,
    ) -> &mut Self {
        self.helpers.insert(name.into(), Box::new(helper));
        self
    }

    /// Look up a variable bound by `set` or by a finished block call.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Complete the innermost open block call: pop its captured body, invoke
    /// the helper, and bind the result.
    fn finish_block(&mut self) -> Result<(), RenderError> {
        let call = self.pending.pop().ok_or(RenderError::UnexpectedEnd)?;
        let content = self.captured.pop().ok_or(RenderError::UnexpectedEnd)?;
        let helper = self
            .helpers
            .get(&call.helper)
            .ok_or_else(|| RenderError::UnknownHelper(call.helper.clone()))?;
        let result = helper(content);
        self.vars.insert(call.var, result);
        Ok(())
    }
}

impl EvaluationContext for Bindings {
    fn run_statement(&mut self, code: &str) -> Result<(), RenderError> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(());
        }
        if code == "end" || code == "}" {
            return self.finish_block();
        }
        if let Some((lhs, rhs)) = split_assignment(code) {
            if let Some(helper) = block_call_target(rhs) {
                self.pending.push(PendingCall {
                    var: lhs.to_owned(),
                    helper,
                });
            } else {
                let value = self.eval_expression(rhs)?;
                self.vars.insert(lhs.to_owned(), value);
            }
            return Ok(());
        }
        Err(RenderError::UnsupportedStatement(code.to_owned()))
    }

    fn eval_expression(&mut self, code: &str) -> Result<Value, RenderError> {
        let code = code.trim();
        if let Some(inner) = helper_call(code, ESCAPE_HELPER) {
            let value = self.eval_expression(inner)?;
            return Ok(Value::Safe(escape_if_needed(&value)));
        }
        if let Some(inner) = helper_call(code, SAFE_HELPER) {
            let value = self.eval_expression(inner)?;
            return Ok(Value::safe(value.into_string()));
        }
        if let Some(literal) = string_literal(code) {
            return Ok(Value::raw(literal));
        }
        if is_identifier(code) {
            return match self.vars.get(code) {
                Some(value) => Ok(value.clone()),
                None => Err(RenderError::UnknownVariable(code.to_owned())),
            };
        }
        Err(RenderError::UnsupportedExpression(code.to_owned()))
    }

    fn end_capture(&mut self, _var: &str, content: SafeString) -> Result<(), RenderError> {
        self.captured.push(content);
        Ok(())
    }
}

/// Split `name = rhs`, rejecting comparison operators (`==`, `!=`, `<=`,
/// `>=`) and left-hand sides that are not plain identifiers.
fn split_assignment(code: &str) -> Option<(&str, &str)> {
    let bytes = code.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'=' {
            continue;
        }
        let prev = i.checked_sub(1).map(|j| bytes[j]);
        if matches!(prev, Some(b'=' | b'!' | b'<' | b'>')) || bytes.get(i + 1) == Some(&b'=') {
            continue;
        }
        let lhs = code[..i].trim();
        return is_identifier(lhs).then(|| (lhs, &code[i + 1..]));
    }
    None
}

/// If `rhs` ends in a block opener (`do`, `{`, optionally followed by a
/// `|params|` list), return the helper name it calls.
fn block_call_target(rhs: &str) -> Option<String> {
    let mut rest = rhs.trim();
    if let Some(stripped) = rest.strip_suffix('|') {
        let open = stripped.rfind('|')?;
        rest = stripped[..open].trim_end();
    }
    if let Some(stripped) = rest.strip_suffix('{') {
        rest = stripped.trim_end();
    } else if let Some(stripped) = rest.strip_suffix("do") {
        if !stripped.is_empty() && !stripped.ends_with(char::is_whitespace) {
            return None;
        }
        rest = stripped.trim_end();
    } else {
        return None;
    }

    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty() && is_identifier(&name)).then_some(name)
}

fn string_literal(code: &str) -> Option<&str> {
    let inner = code.strip_prefix('"')?.strip_suffix('"')?;
    // No escape sequences inside the literal.
    (!inner.contains('"')).then_some(inner)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
