//! Block-capture rewriting.
//!
//! A block-style tag (`<%= helper do %> ... <% end %>`) is not a simple
//! expression: the helper's *return value* is what gets emitted, while the
//! block body still renders into the page. Rewriting decouples the two: the
//! body renders into an isolated capture buffer (which becomes the block's
//! return value), and the helper's result is emitted afterwards, marked safe
//! because its content already passed escape injection inside the capture.

use weft_core::runtime::SAFE_HELPER;

use crate::ir::Node;

/// Compilation-scoped temporary name generator. Names only need to be unique
/// within one compiled template, so no cross-compilation coordination exists.
#[derive(Debug, Default)]
struct NameGen {
    next: u32,
}

impl NameGen {
    fn fresh(&mut self, stem: &str) -> String {
        let n = self.next;
        self.next += 1;
        format!("__weft_{stem}_{n}")
    }
}

/// Rewrite every `BlockOutput` into a capture-and-replay sequence.
pub fn rewrite_blocks(node: Node) -> Node {
    let mut names = NameGen::default();
    rewrite(node, &mut names)
}

fn rewrite(node: Node, names: &mut NameGen) -> Node {
    match node {
        Node::Group(children) => {
            Node::Group(children.into_iter().map(|c| rewrite(c, names)).collect())
        }
        Node::BlockOutput { escape, call, body } => {
            // Innermost first, so nested blocks are already rewritten when
            // their enclosing capture is built.
            let body = rewrite(*body, names);
            let result = names.fresh("result");
            let capture = names.fresh("capture");
            Node::Group(vec![
                Node::CodeStatement(format!("{result} = {}", call.trim())),
                Node::Capture {
                    var: capture,
                    body: Box::new(body),
                },
                Node::CodeStatement("end".to_owned()),
                Node::DynamicOutput {
                    escape,
                    code: format!("{SAFE_HELPER}({result})"),
                },
            ])
        }
        Node::Capture { var, body } => Node::Capture {
            var,
            body: Box::new(rewrite(*body, names)),
        },
        leaf @ (Node::StaticText(_) | Node::Newline | Node::CodeStatement(_)
        | Node::DynamicOutput { .. }) => leaf,
    }
}
