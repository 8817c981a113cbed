//! Runtime values exchanged between the renderer and an evaluation context.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::safe::SafeString;

/// A value produced by evaluating an embedded code fragment.
///
/// `Raw` text is escaped before emission; `Safe` text is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Raw(String),
    Safe(SafeString),
}

impl Value {
    pub fn raw(s: impl Into<String>) -> Self {
        Value::Raw(s.into())
    }

    pub fn safe(s: impl Into<String>) -> Self {
        Value::Safe(SafeString::wrap(s))
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Value::Safe(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::Raw(s) => s,
            Value::Safe(s) => s.as_str(),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Value::Raw(s) => s,
            Value::Safe(s) => s.into_inner(),
        }
    }

    /// Concatenate two values. The result is `Safe` only when both operands
    /// are `Safe`; mixing drops safety, forcing re-escaping downstream.
    pub fn concat(self, other: Value) -> Value {
        match (self, other) {
            (Value::Safe(a), Value::Safe(b)) => {
                let mut s = a.into_inner();
                s.push_str(b.as_str());
                Value::Safe(SafeString::wrap(s))
            }
            (a, b) => {
                let mut s = a.into_string();
                s.push_str(b.as_str());
                Value::Raw(s)
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Raw(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Raw(s)
    }
}

impl From<SafeString> for Value {
    fn from(s: SafeString) -> Self {
        Value::Safe(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_of_two_safe_values_stays_safe() {
        let a = Value::safe("&lt;a&gt;");
        let b = Value::safe("&lt;b&gt;");
        let joined = a.concat(b);
        assert!(joined.is_safe());
        assert_eq!(joined.as_str(), "&lt;a&gt;&lt;b&gt;");
    }

    #[test]
    fn mixing_safe_and_raw_drops_safety() {
        let safe = Value::safe("&lt;a&gt;");
        let raw = Value::raw("<b>");
        assert!(!safe.clone().concat(raw.clone()).is_safe());
        assert!(!raw.concat(safe).is_safe());
    }

    #[test]
    fn raw_concat_raw_is_raw() {
        let joined = Value::raw("a").concat(Value::raw("b"));
        assert_eq!(joined, Value::raw("ab"));
    }
}
