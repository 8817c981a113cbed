//! Code generation: lower the simplified IR to a flat operation list.
//!
//! Lowering is a straight tree walk. By the time it runs, block outputs have
//! been rewritten into capture sequences and static text has been merged, so
//! every remaining node maps to zero or one operation (captures map to a
//! begin/end pair around their body).

use weft_program::Op;

use crate::ir::Node;

/// Lower an IR tree to its operation list.
pub fn generate(node: &Node) -> Vec<Op> {
    let mut ops = Vec::new();
    emit_into(node, &mut ops);
    ops
}

fn emit_into(node: &Node, ops: &mut Vec<Op>) {
    match node {
        Node::Group(children) => {
            for child in children {
                emit_into(child, ops);
            }
        }
        Node::StaticText(text) => {
            if !text.is_empty() {
                ops.push(Op::literal(text));
            }
        }
        Node::Newline => {}
        Node::CodeStatement(code) => ops.push(Op::statement(code)),
        Node::DynamicOutput { escape, code } => ops.push(Op::value(*escape, code)),
        Node::Capture { var, body } => {
            ops.push(Op::BeginCapture { var: var.clone() });
            emit_into(body, ops);
            ops.push(Op::EndCapture);
        }
        Node::BlockOutput { .. } => {
            unreachable!("block outputs are rewritten before code generation")
        }
    }
}
