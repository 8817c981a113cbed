//! The safety marker type.
//!
//! A [`SafeString`] wraps text that is already escaped or otherwise trusted.
//! The escaping machinery passes it through untouched; everything not wrapped
//! is treated as raw and escaped before emission.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A string known to be pre-escaped or trusted, exempt from further escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafeString(String);

impl SafeString {
    /// Mark a string as safe. The caller asserts the content needs no escaping.
    pub fn wrap(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_preserves_content() {
        let s = SafeString::wrap("<b>bold</b>");
        assert_eq!(s.as_str(), "<b>bold</b>");
        assert_eq!(s.to_string(), "<b>bold</b>");
    }

    #[test]
    fn serde_is_transparent() {
        let s = SafeString::wrap("&lt;b&gt;");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#""&lt;b&gt;""#);
        let back: SafeString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
