//! Room and tunnel dungeon generator
//!
//! Classic roguelike floor: rectangular rooms placed at random, rejected on
//! overlap, each new room joined to the previous one by an L-shaped tunnel.

use rand::Rng;

use super::spawning::place_entities;
use super::{DungeonConfig, GeneratedFloor};
use crate::data::SpawnTables;
use crate::ecs::{Entity, Position, RenderOrder, Stairs};
use crate::game::colors;
use crate::world::Map;
use crate::{CoreError, CoreResult};

/// A rectangular room. The outer ring is wall; the interior is carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Overlap test. Rooms that share a wall line also count as intersecting.
    pub fn intersects(&self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Every carved cell of the room
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y1 + 1..self.y2)
            .flat_map(move |y| (self.x1 + 1..self.x2).map(move |x| Position::new(x, y)))
    }

    /// Uniformly random interior cell. Panics if the room has no interior.
    pub fn random_interior(&self, rng: &mut impl Rng) -> Position {
        let x = rng.gen_range(self.x1 + 1..=self.x2 - 1);
        let y = rng.gen_range(self.y1 + 1..=self.y2 - 1);
        Position::new(x, y)
    }
}

/// Carve a room into the map
fn carve_room(map: &mut Map, room: &Room) {
    map.carve_room(room.x1, room.y1, room.x2, room.y2);
}

/// Join two room centers with an L-shaped tunnel.
///
/// `horizontal_first` runs along the previous room's row, then down the new
/// room's column; otherwise down the previous column, then along the new row.
fn connect_rooms(map: &mut Map, prev: Position, new: Position, horizontal_first: bool) {
    if horizontal_first {
        map.carve_h_tunnel(prev.x, new.x, prev.y);
        map.carve_v_tunnel(prev.y, new.y, new.x);
    } else {
        map.carve_v_tunnel(prev.y, new.y, prev.x);
        map.carve_h_tunnel(prev.x, new.x, new.y);
    }
}

/// Generate a floor with rooms and tunnels, placing `player` in the first
/// room and spawning monsters and items room by room.
pub fn generate_dungeon(
    rng: &mut impl Rng,
    depth: u32,
    config: &DungeonConfig,
    spawns: &SpawnTables,
    mut player: Entity,
) -> CoreResult<GeneratedFloor> {
    let mut map = Map::new(config.map_width, config.map_height);
    let mut rooms: Vec<Room> = Vec::new();

    // The player always sits at index 0
    player.pos = Position::default();
    let mut entities = vec![player];

    for attempt in 0..config.max_rooms {
        let w = rng.gen_range(config.room_min_size..=config.room_max_size);
        let h = rng.gen_range(config.room_min_size..=config.room_max_size);
        // Keep the whole rectangle, walls included, inside the map
        let x = rng.gen_range(0..=config.map_width - w - 1);
        let y = rng.gen_range(0..=config.map_height - h - 1);

        let new_room = Room::new(x, y, w, h);

        // Rejected rooms are skipped, not retried
        if rooms.iter().any(|r| new_room.intersects(r)) {
            continue;
        }

        carve_room(&mut map, &new_room);
        let new_center = new_room.center();

        match rooms.last() {
            None => entities[0].pos = new_center,
            Some(prev) => {
                let horizontal_first = rng.gen_bool(0.5);
                connect_rooms(&mut map, prev.center(), new_center, horizontal_first);
            }
        }

        log::debug!(
            "Room {} accepted on attempt {} at ({}, {}) size {}x{}",
            rooms.len(),
            attempt,
            x,
            y,
            w,
            h
        );

        place_entities(rng, &new_room, depth, spawns, &mut entities)?;
        rooms.push(new_room);
    }

    let last = rooms.last().ok_or(CoreError::NoRoomsPlaced {
        attempts: config.max_rooms,
    })?;

    let exit = last.center();
    let stairs = Entity::new(exit, '>', colors::WHITE, "Stairs down")
        .with_render_order(RenderOrder::Stairs)
        .with_stairs(Stairs { floor: depth + 1 });
    entities.push(stairs);

    Ok(GeneratedFloor {
        map,
        entities,
        rooms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_geometry() {
        let room = Room::new(2, 3, 6, 4);
        assert_eq!(room.x2, 8);
        assert_eq!(room.y2, 7);
        assert_eq!(room.center(), Position::new(5, 5));
        assert_eq!(room.interior().count(), 5 * 3);
    }

    #[test]
    fn test_room_intersection() {
        let a = Room::new(0, 0, 5, 5);
        let touching = Room::new(5, 0, 5, 5);
        let apart = Room::new(6, 0, 5, 5);
        let below = Room::new(0, 10, 5, 5);

        assert!(a.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_l_tunnel_both_bends() {
        for horizontal_first in [true, false] {
            let mut map = Map::new(20, 20);
            let prev = Position::new(3, 3);
            let new = Position::new(12, 15);
            connect_rooms(&mut map, prev, new, horizontal_first);

            assert!(map.is_walkable(prev.x, prev.y));
            assert!(map.is_walkable(new.x, new.y));
            let corner = if horizontal_first {
                Position::new(new.x, prev.y)
            } else {
                Position::new(prev.x, new.y)
            };
            assert!(map.is_walkable(corner.x, corner.y));
            assert_eq!(map.walkable_positions().len(), 9 + 12 + 1);
        }
    }
}
