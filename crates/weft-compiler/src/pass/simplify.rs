//! IR simplification: flatten nested groups, merge adjacent statics.
//!
//! Both passes are idempotent and order-independent; they shrink the IR
//! before code generation without changing observable output.

use crate::ir::Node;

/// Splice the children of nested `Group`s into their parent, recursively.
pub fn flatten(node: Node) -> Node {
    match node {
        Node::Group(children) => {
            let mut out = Vec::with_capacity(children.len());
            for child in children {
                match flatten(child) {
                    Node::Group(grandchildren) => out.extend(grandchildren),
                    other => out.push(other),
                }
            }
            Node::Group(out)
        }
        Node::BlockOutput { escape, call, body } => Node::BlockOutput {
            escape,
            call,
            body: Box::new(flatten(*body)),
        },
        Node::Capture { var, body } => Node::Capture {
            var,
            body: Box::new(flatten(*body)),
        },
        leaf => leaf,
    }
}

/// Merge maximal runs of adjacent static text into single nodes.
///
/// Also elides `Newline` bookkeeping markers (spans were already burned into
/// any diagnostics by now) and empty statics, so nothing blocks a run.
pub fn merge(node: Node) -> Node {
    match node {
        Node::Group(children) => {
            let mut out: Vec<Node> = Vec::with_capacity(children.len());
            let mut run = String::new();
            for child in children {
                match merge(child) {
                    Node::StaticText(text) => run.push_str(&text),
                    Node::Newline => {}
                    other => {
                        if !run.is_empty() {
                            out.push(Node::StaticText(std::mem::take(&mut run)));
                        }
                        out.push(other);
                    }
                }
            }
            if !run.is_empty() {
                out.push(Node::StaticText(run));
            }
            Node::Group(out)
        }
        Node::BlockOutput { escape, call, body } => Node::BlockOutput {
            escape,
            call,
            body: Box::new(merge(*body)),
        },
        Node::Capture { var, body } => Node::Capture {
            var,
            body: Box::new(merge(*body)),
        },
        leaf => leaf,
    }
}
