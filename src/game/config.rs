//! Game configuration
//!
//! Loaded from `config.ron` by [`DataManager`](crate::data::DataManager);
//! every field has a default so partial files still work.

use serde::{Deserialize, Serialize};

use super::colors;
use crate::ecs::{Entity, Fighter, Position, RenderOrder};
use crate::items::DEFAULT_CAPACITY;
use crate::world::generation::DungeonConfig;

/// Starting stats of the player character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: 100,
            defense: 1,
            power: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub dungeon: DungeonConfig,
    /// Sight radius used when resolving targeted effects
    pub fov_radius: i32,
    pub inventory_capacity: usize,
    pub player: PlayerStats,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dungeon: DungeonConfig::default(),
            fov_radius: 10,
            inventory_capacity: DEFAULT_CAPACITY,
            player: PlayerStats::default(),
        }
    }
}

impl GameConfig {
    /// A fresh player entity. Its position is set when a floor is generated.
    pub fn new_player(&self) -> Entity {
        let stats = self.player;
        Entity::new(Position::default(), '@', colors::WHITE, "Player")
            .blocking()
            .with_render_order(RenderOrder::Actor)
            .with_fighter(Fighter::new(stats.hp, stats.defense, stats.power, 0))
            .with_inventory(self.inventory_capacity)
            .with_equipment()
    }
}
