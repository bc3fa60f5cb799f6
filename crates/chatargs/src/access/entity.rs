//! Entity and attribute records read from the host's object store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Controller entry that grants every actor control of an entity.
pub const ALL_CONTROLLERS: &str = "all";

/// Actors allowed to act on an entity.
///
/// Stores keep this as comma-separated text (`"player1,player2"` or `"all"`);
/// it is parsed once into trimmed, non-empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerList {
    entries: Vec<String>,
}

impl ControllerList {
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn contains(&self, actor_id: &str) -> bool {
        self.entries.iter().any(|entry| entry == actor_id)
    }

    /// Whether `actor_id` is listed or the list carries `sentinel`.
    pub fn permits(&self, actor_id: &str, sentinel: &str) -> bool {
        self.contains(actor_id) || self.contains(sentinel)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma-separated text form.
    pub fn to_raw(&self) -> String {
        self.entries.join(",")
    }
}

impl<S: AsRef<str>> FromIterator<S> for ControllerList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let raw = iter
            .into_iter()
            .map(|entry| entry.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::parse(&raw)
    }
}

impl Serialize for ControllerList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_raw())
    }
}

impl<'de> Deserialize<'de> for ControllerList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A character (or other actor-controlled object) in the host store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(rename = "controlledby", default)]
    pub controlled_by: ControllerList,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, controlled_by: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            controlled_by: ControllerList::parse(controlled_by),
        }
    }
}

/// A named attribute record attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    #[serde(rename = "characterid")]
    pub entity_id: String,
    pub name: String,
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub max: String,
}

impl Attribute {
    pub fn new(
        id: impl Into<String>,
        entity_id: impl Into<String>,
        name: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_id: entity_id.into(),
            name: name.into(),
            current: current.into(),
            max: String::new(),
        }
    }

    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = max.into();
        self
    }
}
