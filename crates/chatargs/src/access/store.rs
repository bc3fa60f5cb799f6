//! Read-only entity store interface and in-memory implementation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::entity::{Attribute, Entity};

/// Read access to the host's object store.
///
/// All lookups are opaque reads; the store owns persistence and identity.
pub trait EntityStore: Send + Sync {
    /// Entity a placed token (or other on-map object) represents.
    fn find_entity_by_represents(&self, token_id: &str) -> Option<Entity>;
    fn find_entity_by_id(&self, id: &str) -> Option<Entity>;
    /// First attribute of `entity_id` called `name`, in store order.
    fn find_attribute(&self, entity_id: &str, name: &str) -> Option<Attribute>;
    /// Whether the actor is a game master / admin.
    fn is_admin(&self, actor_id: &str) -> bool;
}

pub type SharedEntityStore = Arc<dyn EntityStore>;

// --- Memory Implementation ---

#[derive(Debug, Default)]
pub struct MemoryEntityStore {
    entities: HashMap<String, Entity>,
    /// token id -> represented entity id
    represents: HashMap<String, String>,
    attributes: Vec<Attribute>,
    admins: HashSet<String>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.id.clone(), entity);
    }

    /// Place a token on the map that represents `entity_id`.
    pub fn insert_token(&mut self, token_id: impl Into<String>, entity_id: impl Into<String>) {
        self.represents.insert(token_id.into(), entity_id.into());
    }

    pub fn insert_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn insert_admin(&mut self, actor_id: impl Into<String>) {
        self.admins.insert(actor_id.into());
    }
}

impl EntityStore for MemoryEntityStore {
    fn find_entity_by_represents(&self, token_id: &str) -> Option<Entity> {
        let entity_id = self.represents.get(token_id)?;
        self.entities.get(entity_id).cloned()
    }

    fn find_entity_by_id(&self, id: &str) -> Option<Entity> {
        self.entities.get(id).cloned()
    }

    fn find_attribute(&self, entity_id: &str, name: &str) -> Option<Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.entity_id == entity_id && attribute.name == name)
            .cloned()
    }

    fn is_admin(&self, actor_id: &str) -> bool {
        self.admins.contains(actor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryEntityStore {
        let mut store = MemoryEntityStore::new();
        store.insert_entity(Entity::new("c1", "Lancelot", "p1"));
        store.insert_token("t1", "c1");
        store.insert_token("t-orphan", "missing");
        store.insert_admin("gm");
        store
    }

    #[test]
    fn satisfies_store_trait() {
        let store: SharedEntityStore = Arc::new(store());
        assert!(store.find_entity_by_id("c1").is_some());
        assert!(store.is_admin("gm"));
        assert!(!store.is_admin("p1"));
    }

    #[test]
    fn resolves_token_to_entity() {
        let store = store();
        let entity = store.find_entity_by_represents("t1").expect("represented entity");
        assert_eq!(entity.name, "Lancelot");
    }

    #[test]
    fn dangling_token_yields_none() {
        let store = store();
        assert!(store.find_entity_by_represents("t-orphan").is_none());
        assert!(store.find_entity_by_represents("t-unknown").is_none());
    }

    #[test]
    fn attribute_lookup_returns_first_match() {
        let mut store = store();
        store.insert_attribute(Attribute::new("a1", "c1", "hp", "12").with_max("20"));
        store.insert_attribute(Attribute::new("a2", "c1", "hp", "3"));
        store.insert_attribute(Attribute::new("a3", "c2", "hp", "9"));

        let attribute = store.find_attribute("c1", "hp").expect("hp attribute");
        assert_eq!(attribute.id, "a1");
        assert_eq!(attribute.max, "20");
        assert!(store.find_attribute("c1", "mana").is_none());
    }
}
