//! Names of the runtime helpers the compiler injects into generated code.
//!
//! The compiler wraps code fragments in calls to these helpers; evaluation
//! contexts that interpret fragments themselves (like the bundled `Bindings`
//! context) recognize the calls through [`helper_call`].

/// Escapes its argument unless the value is already safe.
pub const ESCAPE_HELPER: &str = "__weft_escape";

/// Marks its argument as safe without inspecting it. Used for block-call
/// results, whose content has already been escaped while it was captured.
pub const SAFE_HELPER: &str = "__weft_safe";

/// If `code` is exactly a call to `helper`, returns the argument text.
pub fn helper_call<'a>(code: &'a str, helper: &str) -> Option<&'a str> {
    let rest = code.trim().strip_prefix(helper)?;
    let rest = rest.trim_start().strip_prefix('(')?;
    rest.strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_helper_calls() {
        assert_eq!(helper_call("__weft_escape(x)", ESCAPE_HELPER), Some("x"));
        assert_eq!(helper_call(" __weft_safe( y ) ", SAFE_HELPER), Some(" y "));
    }

    #[test]
    fn nested_calls_unwrap_one_layer() {
        assert_eq!(
            helper_call("__weft_escape(__weft_safe(x))", ESCAPE_HELPER),
            Some("__weft_safe(x)")
        );
    }

    #[test]
    fn rejects_other_code() {
        assert_eq!(helper_call("x", ESCAPE_HELPER), None);
        assert_eq!(helper_call("__weft_escape", ESCAPE_HELPER), None);
        assert_eq!(helper_call("__weft_safe(x)", ESCAPE_HELPER), None);
    }
}
