//! Entity model
//!
//! Entities are plain structs with one optional field per capability.

pub mod components;
pub mod entity;

pub use components::*;
pub use entity::{Entity, EntityId};
