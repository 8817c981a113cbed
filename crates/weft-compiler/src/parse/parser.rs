//! Recursive-descent parser building the IR tree.
//!
//! Scope nesting is expressed through recursion rather than a mutable stack:
//! the parser recurses into a fresh group when an expression tag opens a
//! block, and recurses within the *same* group when a plain code tag opens a
//! conditional or iteration scope (those do not introduce a child scope in
//! the IR; their terminator stays a plain statement).

use crate::diagnostics::{Span, SyntaxError, SyntaxErrorKind};
use crate::ir::Node;

use super::lexer::{Indicator, Lexed, Piece, TagToken, lex};
use super::{closes_block, opens_block, opens_statement};

/// Parse a template source into its IR tree. The returned root is always a
/// [`Node::Group`].
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    let pieces = lex(source)?;
    let mut parser = Parser {
        pieces,
        pos: 0,
        pending: String::new(),
        suppress_newline: false,
    };

    let mut children = Vec::new();
    let closed = parser.parse_scope(&mut children, Scope::Root)?;
    debug_assert!(closed.is_none(), "root scope has no terminator");
    Ok(Node::Group(children))
}

/// What kind of scope the parser is currently filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The whole template. A terminator here is a syntax error.
    Root,
    /// A conditional or iteration statement; the terminator is emitted as a
    /// `CodeStatement` in the same group.
    Statement,
    /// A block-expression body; the terminator closes the scope structurally
    /// (the block-rewrite pass emits its own closing statement).
    Block,
}

/// Marker that a terminator tag closed the current scope.
struct Closed;

struct Parser {
    pieces: Vec<Lexed>,
    pos: usize,
    /// Static text accumulated since the last flush.
    pending: String,
    /// Set by a `-%>` trim marker; eats the next newline character.
    suppress_newline: bool,
}

impl Parser {
    fn next(&mut self) -> Option<Lexed> {
        let lexed = self.pieces.get(self.pos).cloned();
        self.pos += 1;
        lexed
    }

    fn flush(&mut self, out: &mut Vec<Node>) {
        if !self.pending.is_empty() {
            out.push(Node::StaticText(std::mem::take(&mut self.pending)));
        }
    }

    /// Fill `out` until the scope's terminator or end of input.
    ///
    /// Returns `Some(Closed)` when a terminator closed this scope, `None` at
    /// end of input (an error for every scope but the root; the caller holds
    /// the opener span and reports it).
    fn parse_scope(
        &mut self,
        out: &mut Vec<Node>,
        scope: Scope,
    ) -> Result<Option<Closed>, SyntaxError> {
        while let Some(Lexed { piece, span }) = self.next() {
            match piece {
                Piece::Text(text) => {
                    // Trim markers only eat a newline that directly follows.
                    self.suppress_newline = false;
                    self.pending.push_str(&text);
                }
                Piece::Newline => {
                    if self.suppress_newline {
                        self.suppress_newline = false;
                    } else {
                        self.pending.push('\n');
                    }
                    // Flush so the static keeps its trailing newline, then
                    // record the marker for line bookkeeping.
                    self.flush(out);
                    out.push(Node::Newline);
                }
                Piece::Tag(tag) => {
                    self.flush(out);
                    self.suppress_newline = tag.trim;
                    if let Some(closed) = self.tag(tag, span, out, scope)? {
                        return Ok(Some(closed));
                    }
                }
            }
        }

        self.flush(out);
        Ok(None)
    }

    /// Dispatch one tag. Returns `Some(Closed)` if it terminated the scope.
    fn tag(
        &mut self,
        tag: TagToken,
        span: Span,
        out: &mut Vec<Node>,
        scope: Scope,
    ) -> Result<Option<Closed>, SyntaxError> {
        match tag.indicator {
            Indicator::Comment => {
                // Blank lines keep later line numbers accurate without
                // executing anything.
                let newlines = tag.body.matches('\n').count();
                out.push(Node::CodeStatement("\n".repeat(newlines)));
                Ok(None)
            }

            Indicator::Expr | Indicator::RawExpr => {
                let escape = tag.indicator == Indicator::Expr;
                if opens_block(&tag.body) {
                    let mut body = Vec::new();
                    let closed = self.parse_scope(&mut body, Scope::Block)?;
                    if closed.is_none() {
                        return Err(SyntaxError::new(SyntaxErrorKind::UnclosedBlock, span));
                    }
                    out.push(Node::BlockOutput {
                        escape,
                        call: tag.body,
                        body: Box::new(Node::Group(body)),
                    });
                } else {
                    out.push(Node::DynamicOutput {
                        escape,
                        code: tag.body,
                    });
                }
                Ok(None)
            }

            Indicator::Code => {
                if closes_block(&tag.body) {
                    return match scope {
                        Scope::Root => {
                            Err(SyntaxError::new(SyntaxErrorKind::UnmatchedTerminator, span))
                        }
                        Scope::Statement => {
                            out.push(Node::CodeStatement(tag.body));
                            Ok(Some(Closed))
                        }
                        Scope::Block => Ok(Some(Closed)),
                    };
                }

                if opens_block(&tag.body) || opens_statement(&tag.body) {
                    out.push(Node::CodeStatement(tag.body));
                    let closed = self.parse_scope(out, Scope::Statement)?;
                    if closed.is_none() {
                        return Err(SyntaxError::new(SyntaxErrorKind::UnclosedBlock, span));
                    }
                } else {
                    out.push(Node::CodeStatement(tag.body));
                }
                Ok(None)
            }
        }
    }
}
