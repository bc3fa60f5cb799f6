//! Resolution of the entity a command targets, gated by ownership.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, ALL_CONTROLLERS};
use super::invocation::Invocation;
use super::store::EntityStore;

pub const DEFAULT_TARGET_KEY: &str = "characterid";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupOptions {
    /// Argument naming the target entity when nothing is selected.
    pub target_key: String,
    /// Controller entry that permits every actor.
    pub all_controllers: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            target_key: DEFAULT_TARGET_KEY.to_string(),
            all_controllers: ALL_CONTROLLERS.to_string(),
        }
    }
}

/// How a lookup ended. Callers only ever see the entity or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LookupOutcome {
    Authorized(Entity),
    NotFound,
    Denied { entity_id: String },
}

/// Entity targeted by `invocation`, if the invoking actor may act on it.
///
/// A selection takes precedence: the first selected object is resolved
/// through its `represents` relation and the explicit target argument is not
/// consulted. Without a selection the `characterid` argument names the entity
/// directly. A missing target and a denied target both return `None`.
pub fn resolve_authorized_entity(
    store: &dyn EntityStore,
    invocation: &Invocation,
) -> Option<Entity> {
    resolve_authorized_entity_with(store, invocation, &LookupOptions::default())
}

pub fn resolve_authorized_entity_with(
    store: &dyn EntityStore,
    invocation: &Invocation,
    options: &LookupOptions,
) -> Option<Entity> {
    match evaluate(store, invocation, options) {
        LookupOutcome::Authorized(entity) => Some(entity),
        LookupOutcome::NotFound => {
            tracing::debug!(actor = %invocation.actor_id, "no target entity resolved");
            None
        }
        LookupOutcome::Denied { entity_id } => {
            tracing::debug!(
                actor = %invocation.actor_id,
                entity = %entity_id,
                "actor does not control target entity"
            );
            None
        }
    }
}

/// Whether `actor_id` may act on `entity`.
pub fn is_permitted(
    store: &dyn EntityStore,
    entity: &Entity,
    actor_id: &str,
    options: &LookupOptions,
) -> bool {
    store.is_admin(actor_id)
        || entity
            .controlled_by
            .permits(actor_id, options.all_controllers.as_str())
}

fn evaluate(
    store: &dyn EntityStore,
    invocation: &Invocation,
    options: &LookupOptions,
) -> LookupOutcome {
    let Some(entity) = resolve_target(store, invocation, options) else {
        return LookupOutcome::NotFound;
    };

    if is_permitted(store, &entity, &invocation.actor_id, options) {
        LookupOutcome::Authorized(entity)
    } else {
        LookupOutcome::Denied {
            entity_id: entity.id,
        }
    }
}

fn resolve_target(
    store: &dyn EntityStore,
    invocation: &Invocation,
    options: &LookupOptions,
) -> Option<Entity> {
    if let Some(token_id) = invocation.primary_selection() {
        tracing::trace!(token = token_id, "resolving target through selection");
        return store.find_entity_by_represents(token_id);
    }

    let target = invocation.args.named(options.target_key.as_str())?;
    tracing::trace!(target = %target, "resolving target by id argument");
    store.find_entity_by_id(&target.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::store::MemoryEntityStore;

    fn store() -> MemoryEntityStore {
        let mut store = MemoryEntityStore::new();
        store.insert_entity(Entity::new("c-owned", "Galahad", "p1,p2"));
        store.insert_entity(Entity::new("c-shared", "Mule", "all"));
        store.insert_entity(Entity::new("c-npc", "Black Knight", ""));
        store.insert_entity(Entity::new("42", "Numbered", "p1"));
        store.insert_token("t-owned", "c-owned");
        store.insert_token("t-npc", "c-npc");
        store.insert_admin("gm");
        store
    }

    fn resolve(store: &MemoryEntityStore, invocation: &Invocation) -> Option<String> {
        resolve_authorized_entity(store, invocation).map(|entity| entity.id)
    }

    #[test]
    fn controller_resolves_by_selection() {
        let store = store();
        let invocation = Invocation::from_input("p2", "!heal").with_selection(["t-owned"]);
        assert_eq!(resolve(&store, &invocation).as_deref(), Some("c-owned"));
    }

    #[test]
    fn controller_resolves_by_argument() {
        let store = store();
        let invocation = Invocation::from_input("p1", "!heal characterid=c-owned");
        assert_eq!(resolve(&store, &invocation).as_deref(), Some("c-owned"));
    }

    #[test]
    fn all_sentinel_permits_anyone() {
        let store = store();
        let invocation = Invocation::from_input("p9", "!load characterid=c-shared");
        assert_eq!(resolve(&store, &invocation).as_deref(), Some("c-shared"));
    }

    #[test]
    fn admin_bypasses_controller_list() {
        let store = store();
        let invocation = Invocation::from_input("gm", "!smite").with_selection(["t-npc"]);
        assert_eq!(resolve(&store, &invocation).as_deref(), Some("c-npc"));
    }

    #[test]
    fn non_controller_is_denied() {
        let store = store();
        let invocation = Invocation::from_input("p3", "!heal characterid=c-owned");
        assert_eq!(resolve(&store, &invocation), None);
        assert_eq!(
            evaluate(&store, &invocation, &LookupOptions::default()),
            LookupOutcome::Denied {
                entity_id: "c-owned".to_string()
            }
        );
    }

    #[test]
    fn not_found_and_denied_look_the_same() {
        let store = store();
        let missing = Invocation::from_input("p1", "!heal characterid=c-missing");
        let denied = Invocation::from_input("p3", "!heal characterid=c-owned");
        assert_eq!(resolve(&store, &missing), resolve(&store, &denied));
        assert_eq!(
            evaluate(&store, &missing, &LookupOptions::default()),
            LookupOutcome::NotFound
        );
    }

    #[test]
    fn no_selection_and_no_argument() {
        let store = store();
        let invocation = Invocation::from_input("gm", "!heal c-owned");
        assert_eq!(resolve(&store, &invocation), None);
    }

    #[test]
    fn selection_takes_precedence_over_argument() {
        let store = store();
        let invocation = Invocation::from_input("p1", "!heal characterid=c-owned")
            .with_selection(["t-unknown"]);
        assert_eq!(resolve(&store, &invocation), None);
    }

    #[test]
    fn only_first_selection_is_used() {
        let store = store();
        let invocation =
            Invocation::from_input("p1", "!heal").with_selection(["t-npc", "t-owned"]);
        assert_eq!(resolve(&store, &invocation), None);
    }

    #[test]
    fn numeric_id_argument_uses_text_form() {
        let store = store();
        let invocation = Invocation::from_input("p1", "!heal characterid=42");
        assert_eq!(resolve(&store, &invocation).as_deref(), Some("42"));
    }

    #[test]
    fn custom_options() {
        let mut store = store();
        store.insert_entity(Entity::new("c-party", "Cart", "everyone"));
        let options = LookupOptions {
            target_key: "target".to_string(),
            all_controllers: "everyone".to_string(),
        };
        let invocation = Invocation::from_input("p7", "!move target=c-party");
        let entity = resolve_authorized_entity_with(&store, &invocation, &options);
        assert_eq!(entity.map(|entity| entity.name), Some("Cart".to_string()));
    }

    #[test]
    fn permission_check_alone() {
        let store = store();
        let entity = Entity::new("c1", "Squire", "p1");
        let options = LookupOptions::default();
        assert!(is_permitted(&store, &entity, "p1", &options));
        assert!(is_permitted(&store, &entity, "gm", &options));
        assert!(!is_permitted(&store, &entity, "p2", &options));
    }
}
