use crate::ir::Node;
use crate::parse::parse;

use super::{flatten, merge, trim};

/// Parse, trim, simplify, and flatten the result to readable statics.
fn trimmed(source: &str) -> Node {
    merge(flatten(trim(parse(source).unwrap())))
}

#[test]
fn statement_alone_on_a_line_leaves_no_blank_line() {
    let ir = trimmed("a\n<% if x %>\nb\n<% end %>\nc");
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::text("a\n"),
            Node::code(" if x "),
            Node::text("b\n"),
            Node::code(" end "),
            Node::text("c"),
        ])
    );
}

#[test]
fn indentation_before_a_lone_statement_is_removed() {
    let ir = trimmed("a\n  <% if x %>  \nb\n<% end %>\n");
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::text("a\n"),
            Node::code(" if x "),
            Node::text("b\n"),
            Node::code(" end "),
        ])
    );
}

#[test]
fn statement_sharing_a_line_is_untouched() {
    let ir = trimmed("a <% if x %>b<% end %> c");
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::text("a "),
            Node::code(" if x "),
            Node::text("b"),
            Node::code(" end "),
            Node::text(" c"),
        ])
    );
}

#[test]
fn statement_at_start_of_input_trims_its_line() {
    let ir = trimmed("<% setup %>\nbody");
    assert_eq!(
        ir,
        Node::Group(vec![Node::code(" setup "), Node::text("body")])
    );
}

#[test]
fn expression_tags_are_never_trimmed() {
    let ir = trimmed("a\n<%= x %>\nb");
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::text("a\n"),
            Node::dynamic(true, " x "),
            Node::text("\nb"),
        ])
    );
}

#[test]
fn block_closing_line_is_trimmed() {
    let ir = trim(parse("<%= wrap do %>\nIN\n<% end %>\nafter").unwrap());
    let ir = merge(flatten(ir));
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::BlockOutput {
                escape: true,
                call: " wrap do ".into(),
                body: Box::new(Node::Group(vec![Node::text("\nIN\n")])),
            },
            Node::text("after"),
        ])
    );
}

#[test]
fn inline_block_is_untouched() {
    let ir = trimmed("<%= wrap do %>IN<% end %> tail");
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::BlockOutput {
                escape: true,
                call: " wrap do ".into(),
                body: Box::new(Node::Group(vec![Node::text("IN")])),
            },
            Node::text(" tail"),
        ])
    );
}

#[test]
fn inline_block_followed_by_a_newline_is_untouched() {
    // The terminator shares the opener's line, so nothing owns a line here.
    let ir = trimmed("pre <%= wrap do %> <% end %>\npost");
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::text("pre "),
            Node::BlockOutput {
                escape: true,
                call: " wrap do ".into(),
                body: Box::new(Node::Group(vec![Node::text(" ")])),
            },
            Node::text("\npost"),
        ])
    );
}

#[test]
fn statement_on_the_opener_line_of_a_block_body_is_untouched() {
    let ir = trimmed("<%= wrap do %> <% if c %>y<% end %><% end %>");
    assert_eq!(
        ir,
        Node::Group(vec![Node::BlockOutput {
            escape: true,
            call: " wrap do ".into(),
            body: Box::new(Node::Group(vec![
                Node::text(" "),
                Node::code(" if c "),
                Node::text("y"),
                Node::code(" end "),
            ])),
        }])
    );
}

#[test]
fn statements_inside_a_block_body_still_trim_their_lines() {
    let ir = trimmed("<%= wrap do %>\n<% if c %>\ny\n<% end %>\n<% end %>");
    assert_eq!(
        ir,
        Node::Group(vec![Node::BlockOutput {
            escape: true,
            call: " wrap do ".into(),
            body: Box::new(Node::Group(vec![
                Node::text("\n"),
                Node::code(" if c "),
                Node::text("y\n"),
                Node::code(" end "),
            ])),
        }])
    );
}

#[test]
fn comment_on_its_own_line_leaves_no_blank_line() {
    let ir = trimmed("a\n<%# note %>\nb");
    assert_eq!(
        ir,
        Node::Group(vec![Node::text("a\n"), Node::code(""), Node::text("b")])
    );
}
