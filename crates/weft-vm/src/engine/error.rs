//! Rendering failures.

/// Errors raised while executing a compiled template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    #[error("unknown helper `{0}`")]
    UnknownHelper(String),

    #[error("statement is not supported by this context: `{0}`")]
    UnsupportedStatement(String),

    #[error("expression is not supported by this context: `{0}`")]
    UnsupportedExpression(String),

    #[error("block terminator without an open block call")]
    UnexpectedEnd,

    /// A capture operation without its counterpart. [`CompiledTemplate::verify`]
    /// rejects such programs, so this only fires on hand-built op lists.
    ///
    /// [`CompiledTemplate::verify`]: weft_program::CompiledTemplate::verify
    #[error("capture buffer left open or closed without a matching begin")]
    UnbalancedCapture,
}
