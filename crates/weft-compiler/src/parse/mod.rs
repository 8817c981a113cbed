//! Template scanning and parsing.
//!
//! `lexer` splits the source into text pieces, newlines, and whole tags;
//! `classify` holds the lexical heuristics for block openers and terminators;
//! `parser` builds the IR tree by recursive descent.

mod classify;
mod lexer;
mod parser;

#[cfg(test)]
mod parser_tests;

pub use parser::parse;

pub(crate) use classify::{closes_block, opens_block, opens_statement};
pub(crate) use lexer::{Indicator, Lexed, Piece, TagToken, lex};
