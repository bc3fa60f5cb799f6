//! Small helpers shared by command handlers.

use serde_json::Value;

use crate::access::{Attribute, EntityStore};
use crate::args::ArgumentValue;

/// First attribute called `name` on `entity_id`, if the store has one.
pub fn attr_lookup(store: &dyn EntityStore, entity_id: &str, name: &str) -> Option<Attribute> {
    let attribute = store.find_attribute(entity_id, name);
    if attribute.is_none() {
        tracing::trace!(entity = entity_id, attribute = name, "attribute not found");
    }
    attribute
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// [`capitalize`] for loosely typed values; anything but a string yields `""`.
pub fn capitalize_value(value: &Value) -> String {
    match value {
        Value::String(word) => capitalize(word),
        _ => String::new(),
    }
}

/// [`capitalize`] for argument values; integers and booleans yield `""`.
pub fn capitalize_argument(value: &ArgumentValue) -> String {
    match value {
        ArgumentValue::Str(word) => capitalize(word),
        ArgumentValue::Int(_) | ArgumentValue::Bool(_) => String::new(),
    }
}

/// Strictly parse an integer: an optional sign followed by ASCII digits only.
///
/// `None` is the not-a-number result; it is also returned when the digits do
/// not fit in an `i64`.
pub fn filter_int(value: &str) -> Option<i64> {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
