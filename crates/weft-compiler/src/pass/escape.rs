//! Escape injection.
//!
//! The single place where the safety marker's contract is enforced at the
//! template-program level: every escaped-output fragment is wrapped in a call
//! to the runtime escape helper (safe values pass through, raw values are
//! HTML-escaped). Explicitly unescaped output is preserved verbatim. Passes
//! only ever add escape wrapping, never remove it.

use weft_core::runtime::ESCAPE_HELPER;

use crate::ir::Node;

/// Wrap every escaped `DynamicOutput` fragment in the escape helper.
pub fn inject_escaping(node: Node) -> Node {
    match node {
        Node::Group(children) => {
            Node::Group(children.into_iter().map(inject_escaping).collect())
        }
        Node::DynamicOutput { escape: true, code } => Node::DynamicOutput {
            escape: true,
            code: format!("{ESCAPE_HELPER}({code})"),
        },
        Node::BlockOutput { escape, call, body } => Node::BlockOutput {
            escape,
            call,
            body: Box::new(inject_escaping(*body)),
        },
        Node::Capture { var, body } => Node::Capture {
            var,
            body: Box::new(inject_escaping(*body)),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_escaped_output_only() {
        let ir = Node::Group(vec![
            Node::dynamic(true, "x"),
            Node::dynamic(false, "y"),
            Node::code("z"),
        ]);
        assert_eq!(
            inject_escaping(ir),
            Node::Group(vec![
                Node::dynamic(true, "__weft_escape(x)"),
                Node::dynamic(false, "y"),
                Node::code("z"),
            ])
        );
    }

    #[test]
    fn reaches_into_capture_bodies() {
        let ir = Node::Capture {
            var: "c".into(),
            body: Box::new(Node::Group(vec![Node::dynamic(true, "x")])),
        };
        assert_eq!(
            inject_escaping(ir),
            Node::Capture {
                var: "c".into(),
                body: Box::new(Node::Group(vec![Node::dynamic(true, "__weft_escape(x)")])),
            }
        );
    }
}
