//! Undercroft - dungeon floor generation and inventory core
//!
//! Carves room-and-tunnel floors, populates them with depth-scaled monsters
//! and items, and runs the pickup/use/equip/drop rules for carried items.

pub mod data;
pub mod ecs;
pub mod game;
pub mod items;
pub mod world;

// Re-export commonly used types
pub use data::{DataManager, DepthTable, SpawnTables, WeightEntry};
pub use ecs::{Entity, EntityId, Position};
pub use game::{Floor, GameConfig, Message, MessageLog};
pub use items::{AddOutcome, Dropped, Inventory, UseOutcome, UseParams};
pub use world::generation::{generate_floor, DungeonConfig, GeneratedFloor};
pub use world::Map;

/// Errors raised when a caller breaks a contract of the core.
///
/// Gameplay refusals (full inventory, healing at full health, missing target)
/// are never errors; they come back as outcomes and messages.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// Configuration cannot produce a valid floor
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every room attempt intersected an earlier room
    #[error("no room could be placed after {attempts} attempts")]
    NoRoomsPlaced { attempts: u32 },

    /// Weighted choice over a table whose weights sum to zero
    #[error("weighted choice over a table with no positive weight")]
    EmptyWeightTable,

    /// Item is not in the inventory it was looked up in
    #[error("item {0} is not carried")]
    ItemNotCarried(EntityId),

    /// Entity lacks a capability the operation requires
    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        entity: EntityId,
        component: &'static str,
    },

    /// Item has no equippable capability
    #[error("item {0} cannot be equipped")]
    NotEquippable(EntityId),

    /// Reading or writing a data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A RON data file could not be parsed
    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    /// A value could not be written as RON
    #[error("RON write error: {0}")]
    RonWrite(#[from] ron::Error),
}

/// Result type used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;
