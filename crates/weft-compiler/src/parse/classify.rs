//! Lexical heuristics for block structure.
//!
//! Matching is regular-expression shaped, not a host-language parse: a body
//! that merely resembles a block opener (say, a string literal ending in
//! `do`) is misclassified. This matches the behavior templates in the wild
//! rely on; see DESIGN.md for the trade-off.

use std::sync::OnceLock;

use regex_automata::meta::Regex;

fn block_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:(?:\s|\))do|\{)\s*(?:\|[^|]*\|)?\s*$").expect("pattern is valid")
    })
}

fn statement_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:if|unless|case)\b").expect("pattern is valid"))
}

fn terminator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:end|\})\s*$").expect("pattern is valid"))
}

/// Does this fragment end with a block-opening token (`do`, `{`), optionally
/// followed by a parameter list?
pub(crate) fn opens_block(code: &str) -> bool {
    block_open().is_match(code)
}

/// Does this fragment open a conditional (`if`/`unless`/`case`) scope?
pub(crate) fn opens_statement(code: &str) -> bool {
    statement_open().is_match(code)
}

/// Is this fragment a block terminator (`end`, `}`)?
pub(crate) fn closes_block(code: &str) -> bool {
    terminator().is_match(code)
}
