//! Span-based syntax errors and annotated snippet rendering.

use std::fmt;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// Byte range into the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// 1-based line and column of the span start within `source`.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let start = (self.start as usize).min(source.len());
        let before = &source[..start];
        let line = before.matches('\n').count() + 1;
        let col = before.rfind('\n').map_or(start, |nl| start - nl - 1) + 1;
        (line, col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What went wrong while scanning or parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("tag is not closed with `%>`")]
    UnclosedTag,

    #[error("block terminator without an open block")]
    UnmatchedTerminator,

    #[error("block left open at end of input")]
    UnclosedBlock,
}

/// A compile-time template failure. Never recovered automatically; there is
/// no partial-success mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (offset {span})")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Builder for rendering this error against its source.
    pub fn printer<'s>(&self, source: &'s str) -> SyntaxErrorPrinter<'s> {
        SyntaxErrorPrinter {
            error: *self,
            source,
            path: None,
            colored: false,
        }
    }

    /// Plain annotated snippet, convenience over [`SyntaxError::printer`].
    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }
}

/// Builder-pattern printer for rendering a syntax error with source context.
pub struct SyntaxErrorPrinter<'s> {
    error: SyntaxError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'s> SyntaxErrorPrinter<'s> {
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.kind.to_string();
        let range = adjust_range(self.error.span, self.source.len());

        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        format!("{}", renderer.render(&report))
    }
}

fn adjust_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let start = span.start as usize;
    let end = span.end as usize;

    // Zero-width spans still need a visible caret
    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end.min(limit)
}
