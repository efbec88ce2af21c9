//! Data tables and external game content
//!
//! Spawn tables, monster and item templates, and loading them from RON
//! files for easy tuning.

pub mod items;
pub mod loader;
pub mod monsters;
pub mod spawns;
pub mod tables;

pub use items::ItemKind;
pub use loader::{export_default_data, DataManager, DEFAULT_DATA_DIR};
pub use monsters::{MonsterKind, MonsterTemplate};
pub use spawns::SpawnTables;
pub use tables::{resolve_by_depth, weighted_choice, DepthTable, WeightEntry};
