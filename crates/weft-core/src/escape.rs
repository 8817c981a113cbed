//! HTML escaping with safety awareness.

use crate::safe::SafeString;
use crate::value::Value;

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The runtime contract behind escaped-output tags: a value that is already
/// safe passes through unchanged, anything else is HTML-escaped.
///
/// This is the single enforcement point of the safety marker; applying it
/// twice never double-escapes.
pub fn escape_if_needed(value: &Value) -> SafeString {
    match value {
        Value::Safe(s) => s.clone(),
        Value::Raw(s) => SafeString::wrap(escape_html(s)),
    }
}
