use crate::diagnostics::SyntaxErrorKind;
use crate::ir::{Node, dump};

use super::parse;

#[test]
fn plain_text_is_a_single_static() {
    let ir = parse("hello world").unwrap();
    assert_eq!(ir, Node::Group(vec![Node::text("hello world")]));
}

#[test]
fn empty_source_is_an_empty_group() {
    assert_eq!(parse("").unwrap(), Node::Group(vec![]));
}

#[test]
fn newlines_stay_in_static_text_and_leave_markers() {
    let ir = parse("a\nb").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![Node::text("a\n"), Node::Newline, Node::text("b")])
    );
}

#[test]
fn escaped_delimiters_become_literal_text() {
    let ir = parse("use <%% and %%> here").unwrap();
    assert_eq!(ir, Node::Group(vec![Node::text("use <% and %> here")]));
}

#[test]
fn expression_tags_set_the_escape_flag() {
    let ir = parse("<%= a %><%== b %>").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![Node::dynamic(true, " a "), Node::dynamic(false, " b ")])
    );
}

#[test]
fn code_tag_is_a_statement() {
    let ir = parse("<% x = 1 %>").unwrap();
    assert_eq!(ir, Node::Group(vec![Node::code(" x = 1 ")]));
}

#[test]
fn comment_keeps_only_its_newlines() {
    let ir = parse("<%# one\ntwo\nthree %>after").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![Node::code("\n\n"), Node::text("after")])
    );
}

#[test]
fn conditional_scope_stays_in_the_same_group() {
    let ir = parse("<% if x %>yes<% end %>").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::code(" if x "),
            Node::text("yes"),
            Node::code(" end "),
        ])
    );
}

#[test]
fn block_expression_opens_a_nested_scope() {
    let ir = parse("<%= helper do %>INNER<% end %>").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![Node::BlockOutput {
            escape: true,
            call: " helper do ".into(),
            body: Box::new(Node::Group(vec![Node::text("INNER")])),
        }])
    );
}

#[test]
fn nesting_mirrors_source_structure() {
    let ir = parse("<%= outer do %>a<%= inner do %>b<% end %>c<% end %>d").unwrap();
    insta::assert_snapshot!(dump(&ir), @r#"
    group
      block escape " outer do "
        group
          static "a"
          block escape " inner do "
            group
              static "b"
          static "c"
      static "d"
    "#);
}

#[test]
fn conditional_inside_block_body() {
    let ir = parse("<%= wrap do %><% if x %>y<% end %><% end %>").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![Node::BlockOutput {
            escape: true,
            call: " wrap do ".into(),
            body: Box::new(Node::Group(vec![
                Node::code(" if x "),
                Node::text("y"),
                Node::code(" end "),
            ])),
        }])
    );
}

#[test]
fn plain_code_block_opener_does_not_create_a_child_scope() {
    let ir = parse("<% items.each do |item| %>x<% end %>").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![
            Node::code(" items.each do |item| "),
            Node::text("x"),
            Node::code(" end "),
        ])
    );
}

#[test]
fn trim_marker_suppresses_the_following_newline() {
    let ir = parse("<% a -%>\nb").unwrap();
    assert_eq!(
        ir,
        Node::Group(vec![Node::code(" a "), Node::Newline, Node::text("b")])
    );
}

#[test]
fn unclosed_block_is_a_syntax_error() {
    let error = parse("<% if true %>no end").unwrap_err();
    assert_eq!(error.kind, SyntaxErrorKind::UnclosedBlock);
    assert_eq!(error.span.range(), 0..13);
}

#[test]
fn unclosed_block_expression_is_a_syntax_error() {
    let error = parse("<%= helper do %>dangling").unwrap_err();
    assert_eq!(error.kind, SyntaxErrorKind::UnclosedBlock);
}

#[test]
fn stray_terminator_is_a_syntax_error() {
    let error = parse("<% end %>").unwrap_err();
    assert_eq!(error.kind, SyntaxErrorKind::UnmatchedTerminator);
    assert_eq!(error.span.range(), 0..9);
}

#[test]
fn unclosed_tag_is_a_syntax_error() {
    let error = parse("a <% b").unwrap_err();
    assert_eq!(error.kind, SyntaxErrorKind::UnclosedTag);
    let (line, col) = error.span.line_col("a <% b");
    assert_eq!((line, col), (1, 3));
}
