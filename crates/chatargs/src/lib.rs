//! Chat command argument parsing for virtual tabletop scripts.
//!
//! This crate provides:
//! - A tokenizer turning one chat command line into positional, `key=value`
//!   and `--flag` arguments
//! - Target entity resolution with controller / admin checks against an
//!   injected store
//! - Small helpers for attribute lookup, capitalization and strict integers

pub mod access;
pub mod args;
pub mod config;
pub mod error;
pub mod helpers;

// Re-export main types
pub use access::{
    resolve_authorized_entity, Attribute, Entity, EntityStore, Invocation, MemoryEntityStore,
    SharedEntityStore,
};
pub use args::{tokenize, ArgumentKey, ArgumentMap, ArgumentValue, ChatCommand, Tokenizer};
pub use config::{load_config, load_or_create_config, ChatArgsConfig};
pub use error::{ChatArgsError, Result};
pub use helpers::{attr_lookup, capitalize, filter_int};
