//! Target entity resolution and ownership checks for chat commands.

pub mod entity;
pub mod invocation;
pub mod lookup;
pub mod store;

pub use entity::{Attribute, ControllerList, Entity, ALL_CONTROLLERS};
pub use invocation::Invocation;
pub use lookup::{
    is_permitted, resolve_authorized_entity, resolve_authorized_entity_with, LookupOptions,
};
pub use store::{EntityStore, MemoryEntityStore, SharedEntityStore};
