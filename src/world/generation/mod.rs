//! Procedural floor generation
//!
//! Rooms, tunnels, stairs and the initial spawns of a single floor. Each
//! floor is generated from scratch; nothing carries over except the player.

pub mod rooms;
pub mod spawning;

pub use rooms::Room;
pub use spawning::place_entities;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Map;
use crate::data::SpawnTables;
use crate::ecs::Entity;
use crate::{CoreError, CoreResult};

/// Size and room parameters for floor generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub map_width: i32,
    pub map_height: i32,
    /// Number of room placement attempts (not a count of rooms)
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 43,
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
        }
    }
}

impl DungeonConfig {
    /// Reject configurations that cannot be sampled
    pub fn validate(&self) -> CoreResult<()> {
        if self.room_min_size < 3 {
            return Err(CoreError::InvalidConfig(format!(
                "room_min_size {} leaves no interior",
                self.room_min_size
            )));
        }
        if self.room_min_size > self.room_max_size {
            return Err(CoreError::InvalidConfig(format!(
                "room_min_size {} exceeds room_max_size {}",
                self.room_min_size, self.room_max_size
            )));
        }
        if self.map_width <= self.room_max_size + 1 || self.map_height <= self.room_max_size + 1 {
            return Err(CoreError::InvalidConfig(format!(
                "{}x{} map cannot hold a room of size {}",
                self.map_width, self.map_height, self.room_max_size
            )));
        }
        if self.max_rooms == 0 {
            return Err(CoreError::InvalidConfig("max_rooms must be positive".to_string()));
        }
        Ok(())
    }
}

/// A freshly generated floor
#[derive(Debug, Clone)]
pub struct GeneratedFloor {
    pub map: Map,
    /// Player first, then spawns in placement order, then the stairs
    pub entities: Vec<Entity>,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Room>,
}

/// Generate a floor at `depth` around `player`.
///
/// The same RNG state, config and tables always give the same floor.
pub fn generate_floor(
    rng: &mut impl Rng,
    depth: u32,
    config: &DungeonConfig,
    spawns: &SpawnTables,
    player: Entity,
) -> CoreResult<GeneratedFloor> {
    config.validate()?;

    let floor = rooms::generate_dungeon(rng, depth, config, spawns, player)?;

    log::info!(
        "Generated floor {}: {} rooms, {} entities",
        depth,
        floor.rooms.len(),
        floor.entities.len()
    );

    Ok(floor)
}
