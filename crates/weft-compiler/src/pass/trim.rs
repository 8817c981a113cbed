//! Whitespace trimming around line-owning control tags.
//!
//! A statement tag (or the closing `end` of a block expression) that sits on
//! a source line by itself would otherwise leave a blank line in the output:
//! the indentation before it and the newline after it are pure artifacts of
//! laying out control flow. This pass removes both, mirroring conventional
//! ERB trim mode. Tags sharing a line with other content are untouched, and
//! emitted values are never altered.
//!
//! Runs on the raw IR, before block rewriting, while `BlockOutput` closing
//! boundaries are still visible.

use crate::ir::Node;

/// Trim whitespace-only artifacts around statement tags that own their line.
pub fn trim(node: Node) -> Node {
    match node {
        Node::Group(children) => Node::Group(trim_children(children, true)),
        other => trim_nested(other),
    }
}

/// Recurse below the root. Any group reached from here is a block body,
/// which begins and ends mid-line at its opener and terminator tags.
fn trim_nested(node: Node) -> Node {
    match node {
        Node::Group(children) => Node::Group(trim_children(children, false)),
        Node::BlockOutput { escape, call, body } => Node::BlockOutput {
            escape,
            call,
            body: Box::new(trim_nested(*body)),
        },
        Node::Capture { var, body } => Node::Capture {
            var,
            body: Box::new(trim_nested(*body)),
        },
        leaf => leaf,
    }
}

/// How the leading side of a boundary looks.
enum Leading {
    /// Not at the start of a line; leave everything alone.
    No,
    /// At line start, nothing to remove.
    Clean,
    /// At line start behind whitespace-only indentation: truncate the
    /// previous static to this byte length.
    StripTo(usize),
}

/// How the trailing side of a boundary looks.
enum Trailing {
    No,
    Clean,
    /// Drop this many bytes (indentation plus newline) from the front of the
    /// next static.
    StripFirst(usize),
    /// The next static is trailing whitespace at end of input; drop it all.
    StripAll,
}

/// `at_edges` is true for the root group only: it begins at the start of the
/// input and ends at its end. A block body's edges sit mid-line.
fn trim_children(children: Vec<Node>, at_edges: bool) -> Vec<Node> {
    let mut children: Vec<Node> = children.into_iter().map(trim_nested).collect();

    for i in 0..children.len() {
        let (leading, trailing) = match &children[i] {
            Node::CodeStatement(_) => (
                leading_at(&children, i, at_edges),
                trailing_at(&children, i, at_edges),
            ),
            Node::BlockOutput { body, .. } => {
                (closing_leading(body), trailing_at(&children, i, at_edges))
            }
            _ => continue,
        };

        // Both sides must be whitespace for the tag to own its line.
        if matches!(leading, Leading::No) || matches!(trailing, Trailing::No) {
            continue;
        }

        let is_block = matches!(children[i], Node::BlockOutput { .. });
        match leading {
            Leading::StripTo(len) => {
                if is_block {
                    if let Node::BlockOutput { body, .. } = &mut children[i] {
                        strip_closing(body, len);
                    }
                } else if i > 0 {
                    if let Some(Node::StaticText(t)) = children.get_mut(i - 1) {
                        t.truncate(len);
                    }
                }
            }
            Leading::No | Leading::Clean => {}
        }

        match trailing {
            Trailing::StripFirst(len) => {
                if let Some(Node::StaticText(t)) = children.get_mut(i + 1) {
                    t.drain(..len);
                }
            }
            Trailing::StripAll => {
                if let Some(Node::StaticText(t)) = children.get_mut(i + 1) {
                    t.clear();
                }
            }
            Trailing::No | Trailing::Clean => {}
        }
    }

    children
}

/// Is the node at `i` preceded only by whitespace on its line?
///
/// `i` may equal `children.len()` to ask about the position just past the
/// last child (used for block-closing boundaries).
fn leading_at(children: &[Node], i: usize, at_edges: bool) -> Leading {
    if i == 0 {
        return if at_edges { Leading::Clean } else { Leading::No };
    }
    match &children[i - 1] {
        Node::Newline => Leading::Clean,
        Node::StaticText(t) => {
            if let Some(pos) = t.rfind('\n') {
                let tail = &t[pos + 1..];
                if !tail.trim().is_empty() {
                    Leading::No
                } else if tail.is_empty() {
                    Leading::Clean
                } else {
                    Leading::StripTo(pos + 1)
                }
            } else if !t.trim().is_empty() {
                Leading::No
            } else if i == 1 {
                // A whitespace-only static at the head of the group is
                // line-start indentation only if the group starts a line;
                // a block body's first static follows the opener tag.
                if at_edges {
                    Leading::StripTo(0)
                } else {
                    Leading::No
                }
            } else if matches!(children[i - 2], Node::Newline) {
                Leading::StripTo(0)
            } else {
                Leading::No
            }
        }
        _ => Leading::No,
    }
}

/// Is the node at `i` followed only by whitespace up to (and including) the
/// next newline?
fn trailing_at(children: &[Node], i: usize, at_edges: bool) -> Trailing {
    match children.get(i + 1) {
        // End of the group: end of input for the root, but in a block body
        // the terminator tag continues the current line.
        None => {
            if at_edges {
                Trailing::Clean
            } else {
                Trailing::No
            }
        }
        // A newline already consumed by a trim marker.
        Some(Node::Newline) => Trailing::Clean,
        Some(Node::StaticText(t)) => match t.find('\n') {
            Some(pos) if t[..pos].trim().is_empty() => Trailing::StripFirst(pos + 1),
            None if t.trim().is_empty() && i + 2 >= children.len() && at_edges => {
                Trailing::StripAll
            }
            _ => Trailing::No,
        },
        _ => Trailing::No,
    }
}

/// The closing boundary of a block expression: the terminator tag sits just
/// past the body's last child, mid-line (on the opener's own line when the
/// body is empty).
fn closing_leading(body: &Node) -> Leading {
    let Node::Group(children) = body else {
        return Leading::No;
    };
    leading_at(children, children.len(), false)
}

/// Apply a closing-boundary strip to the body's trailing static.
fn strip_closing(body: &mut Node, len: usize) {
    if let Node::Group(children) = body {
        if let Some(Node::StaticText(t)) = children.last_mut() {
            t.truncate(len);
        }
    }
}
