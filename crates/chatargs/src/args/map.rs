use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::ArgumentValue;

/// Key of an argument map entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgumentKey {
    /// Zero-based position of the word in the split input.
    Index(usize),
    /// Explicit name from a `key=value` or `--flag` word.
    Name(String),
}

impl fmt::Display for ArgumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for ArgumentKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ArgumentKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ArgumentKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Ordered argument map produced by the tokenizer.
///
/// Entries keep the position of their first insertion; inserting a key that
/// is already present replaces its value. Command lines are short, so the
/// entries live in a plain vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    entries: Vec<(ArgumentKey, ArgumentValue)>,
}

impl ArgumentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<ArgumentKey>,
        value: impl Into<ArgumentValue>,
    ) -> Option<ArgumentValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &ArgumentKey) -> Option<&ArgumentValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &ArgumentKey) -> bool {
        self.get(key).is_some()
    }

    /// Value registered at a positional index.
    pub fn positional(&self, index: usize) -> Option<&ArgumentValue> {
        self.entries.iter().find_map(|(key, value)| match key {
            ArgumentKey::Index(existing) if *existing == index => Some(value),
            _ => None,
        })
    }

    /// Value registered under an explicit name.
    pub fn named(&self, name: &str) -> Option<&ArgumentValue> {
        self.entries.iter().find_map(|(key, value)| match key {
            ArgumentKey::Name(existing) if existing == name => Some(value),
            _ => None,
        })
    }

    /// Whether `name` is present and holds boolean `true`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.named(name), Some(ArgumentValue::Bool(true)))
    }

    /// Positional entries in ascending index order.
    pub fn positionals(&self) -> Vec<(usize, &ArgumentValue)> {
        let mut positionals = self
            .entries
            .iter()
            .filter_map(|(key, value)| match key {
                ArgumentKey::Index(index) => Some((*index, value)),
                ArgumentKey::Name(_) => None,
            })
            .collect::<Vec<_>>();
        positionals.sort_by_key(|(index, _)| *index);
        positionals
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArgumentKey, &ArgumentValue)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object form, keys rendered as text.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .json_entries()
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    ArgumentValue::Int(number) => serde_json::Value::from(*number),
                    ArgumentValue::Bool(flag) => serde_json::Value::Bool(*flag),
                    ArgumentValue::Str(text) => serde_json::Value::String(text.clone()),
                };
                (key, value)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }

    /// Entries keyed by their text form.
    ///
    /// `Index(3)` and `Name("3")` share the text key `"3"`; the entry written
    /// last wins and the key keeps the position it was first written at.
    fn json_entries(&self) -> Vec<(String, &ArgumentValue)> {
        let mut merged: Vec<(String, &ArgumentValue)> = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let text = key.to_string();
            match merged.iter_mut().find(|(existing, _)| *existing == text) {
                Some((_, slot)) => *slot = value,
                None => merged.push((text, value)),
            }
        }
        merged
    }
}

impl Serialize for ArgumentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.json_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}
