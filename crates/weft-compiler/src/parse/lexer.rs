//! Logos-based scanner.
//!
//! The scanner recognizes, in priority order: escaped literal delimiters
//! (`<%%`, `%%>`), newlines, whole `<% ... %>` tags (consumed by a callback
//! via `remainder`/`bump`), and plain text. Tag bodies are passed through
//! verbatim; only `%%>` escapes inside a body are unescaped.

use logos::Logos;

use crate::diagnostics::{Span, SyntaxError, SyntaxErrorKind};

/// The indicator character after the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    /// `<% ... %>` — statement, side effect only.
    Code,
    /// `<%= ... %>` — escaped output.
    Expr,
    /// `<%== ... %>` — unescaped output.
    RawExpr,
    /// `<%# ... %>` — comment.
    Comment,
}

/// A whole tag: indicator, verbatim body, and whether a `-%>` trim marker
/// suppresses the following newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagToken {
    pub(crate) indicator: Indicator,
    pub(crate) body: String,
    pub(crate) trim: bool,
}

/// Only unterminated tags can fail the scanner; every other byte sequence
/// lexes as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LexError;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
enum RawToken {
    #[token("<%%")]
    EscapedOpen,

    #[token("%%>")]
    EscapedClose,

    #[token("\n")]
    Newline,

    #[token("<%", lex_tag)]
    Tag(TagToken),

    #[regex(r"[^<%\n]+")]
    Text,

    #[token("<")]
    Lt,

    #[token("%")]
    Percent,
}

/// Consume the remainder of a tag after its `<%` opener.
fn lex_tag(lex: &mut logos::Lexer<'_, RawToken>) -> Result<TagToken, LexError> {
    let rest = lex.remainder();

    let (indicator, skip) = if rest.starts_with("==") {
        (Indicator::RawExpr, 2)
    } else if rest.starts_with('=') {
        (Indicator::Expr, 1)
    } else if rest.starts_with('#') {
        (Indicator::Comment, 1)
    } else {
        (Indicator::Code, 0)
    };

    // Find the closing delimiter, skipping `%%>` escapes inside the body.
    let mut search = skip;
    let close = loop {
        let Some(found) = rest[search..].find("%>") else {
            return Err(LexError);
        };
        let at = search + found;
        if at > skip && rest.as_bytes()[at - 1] == b'%' {
            search = at + 2;
            continue;
        }
        break at;
    };

    let trim = close > skip && rest.as_bytes()[close - 1] == b'-';
    let body_end = if trim { close - 1 } else { close };
    let body = rest[skip..body_end].replace("%%>", "%>");

    lex.bump(close + 2);
    Ok(TagToken {
        indicator,
        body,
        trim,
    })
}

/// A scanned piece with its source span.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lexed {
    pub(crate) piece: Piece,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Piece {
    /// Literal text (escaped delimiters already unescaped).
    Text(String),
    /// A literal newline character.
    Newline,
    /// A whole tag.
    Tag(TagToken),
}

/// Scan the whole source. Fails only on an unterminated tag.
pub(crate) fn lex(source: &str) -> Result<Vec<Lexed>, SyntaxError> {
    let mut pieces = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start as u32, range.end as u32);
        let piece = match result {
            Ok(RawToken::Text) => Piece::Text(lexer.slice().to_owned()),
            Ok(RawToken::Lt) => Piece::Text("<".to_owned()),
            Ok(RawToken::Percent) => Piece::Text("%".to_owned()),
            Ok(RawToken::EscapedOpen) => Piece::Text("<%".to_owned()),
            Ok(RawToken::EscapedClose) => Piece::Text("%>".to_owned()),
            Ok(RawToken::Newline) => Piece::Newline,
            Ok(RawToken::Tag(tag)) => Piece::Tag(tag),
            Err(LexError) => {
                return Err(SyntaxError::new(SyntaxErrorKind::UnclosedTag, span));
            }
        };
        pieces.push(Lexed { piece, span });
    }

    Ok(pieces)
}
