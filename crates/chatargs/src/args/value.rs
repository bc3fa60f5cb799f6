use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed argument value produced by the tokenizer.
///
/// Serializes untagged, so a map of values renders as a plain JSON object
/// (`{"count": 3, "hidden": true, "0": "!roll"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl ArgumentValue {
    /// Coerce the right-hand side of a `key=value` token.
    ///
    /// Whole-text base-10 integers become [`ArgumentValue::Int`], the exact
    /// literals `true` / `false` become [`ArgumentValue::Bool`], anything else
    /// stays a string.
    pub fn coerce(raw: &str) -> Self {
        if let Ok(number) = raw.parse::<i64>() {
            return Self::Int(number);
        }
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(raw.to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Text form of the value, used when an argument is handed to the store
    /// as an identifier.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(number) => write!(f, "{number}"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Str(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
