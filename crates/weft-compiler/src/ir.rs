//! Intermediate representation of a parsed template.
//!
//! A closed sum type: every pass matches exhaustively, so adding a variant
//! forces every pass to handle it at build time.

use std::fmt::Write as _;

/// One node of the template IR tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Sequencing container; order is significant, may be empty. The root of
    /// every parsed template is a `Group`.
    Group(Vec<Node>),

    /// Literal output, copied verbatim.
    StaticText(String),

    /// Source-line bookkeeping marker; produces no output and is elided
    /// before code generation.
    Newline,

    /// A code fragment executed for side effect only.
    CodeStatement(String),

    /// A code fragment whose value is appended to the output buffer.
    DynamicOutput { escape: bool, code: String },

    /// A dynamic-output tag whose fragment opens a block; `body` holds the
    /// nested IR up to the matching terminator.
    BlockOutput {
        escape: bool,
        call: String,
        body: Box<Node>,
    },

    /// Redirect output emitted by `body` into an isolated buffer named `var`.
    /// Introduced by the block-rewrite pass; never produced by the parser.
    Capture { var: String, body: Box<Node> },
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::StaticText(s.into())
    }

    pub fn code(s: impl Into<String>) -> Self {
        Node::CodeStatement(s.into())
    }

    pub fn dynamic(escape: bool, code: impl Into<String>) -> Self {
        Node::DynamicOutput {
            escape,
            code: code.into(),
        }
    }
}

/// Indented tree listing, used by parser and pass tests.
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    dump_into(node, 0, &mut out);
    out
}

fn dump_into(node: &Node, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Group(children) => {
            writeln!(out, "{pad}group").expect("String write never fails");
            for child in children {
                dump_into(child, depth + 1, out);
            }
        }
        Node::StaticText(text) => {
            writeln!(out, "{pad}static {text:?}").expect("String write never fails");
        }
        Node::Newline => {
            writeln!(out, "{pad}newline").expect("String write never fails");
        }
        Node::CodeStatement(code) => {
            writeln!(out, "{pad}code {code:?}").expect("String write never fails");
        }
        Node::DynamicOutput { escape, code } => {
            let kind = if *escape { "escape" } else { "raw" };
            writeln!(out, "{pad}dynamic {kind} {code:?}").expect("String write never fails");
        }
        Node::BlockOutput { escape, call, body } => {
            let kind = if *escape { "escape" } else { "raw" };
            writeln!(out, "{pad}block {kind} {call:?}").expect("String write never fails");
            dump_into(body, depth + 1, out);
        }
        Node::Capture { var, body } => {
            writeln!(out, "{pad}capture {var}").expect("String write never fails");
            dump_into(body, depth + 1, out);
        }
    }
}
