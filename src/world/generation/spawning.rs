//! Per-room monster and item placement
//!
//! Counts, kinds and rarities all come from depth-scaled tables, so deeper
//! floors get more and nastier spawns.

use rand::Rng;

use super::rooms::Room;
use crate::data::tables::{resolve_weights, weighted_choice};
use crate::data::SpawnTables;
use crate::ecs::{Entity, Position};
use crate::CoreResult;

/// True when any entity stands exactly on `pos`
fn is_occupied(entities: &[Entity], pos: Position) -> bool {
    entities.iter().any(|e| e.at(pos))
}

/// Populate one room.
///
/// A draw that lands on an occupied cell is dropped rather than retried, so
/// crowded rooms end up with fewer spawns than requested. Occupancy is
/// checked against the whole collection, not just this room's spawns.
/// A room with no interior gets nothing.
pub fn place_entities(
    rng: &mut impl Rng,
    room: &Room,
    depth: u32,
    spawns: &SpawnTables,
    entities: &mut Vec<Entity>,
) -> CoreResult<()> {
    if room.interior().next().is_none() {
        return Ok(());
    }

    let max_monsters = spawns.max_monsters_per_room.resolve(depth, 0);
    let max_items = spawns.max_items_per_room.resolve(depth, 0);

    let num_monsters = rng.gen_range(0..=max_monsters);
    let num_items = rng.gen_range(0..=max_items);

    let monster_weights = resolve_weights(&spawns.monsters, depth);
    let item_weights = resolve_weights(&spawns.items, depth);

    let mut placed_monsters = 0;
    for _ in 0..num_monsters {
        let pos = room.random_interior(rng);
        if is_occupied(entities, pos) {
            continue;
        }

        let kind = weighted_choice(rng, &monster_weights)?;
        entities.push(kind.template().spawn(pos));
        placed_monsters += 1;
    }

    let mut placed_items = 0;
    for _ in 0..num_items {
        let pos = room.random_interior(rng);
        if is_occupied(entities, pos) {
            continue;
        }

        let kind = weighted_choice(rng, &item_weights)?;
        entities.push(kind.spawn(pos));
        placed_items += 1;
    }

    log::debug!(
        "Room at ({}, {}): {}/{} monsters, {}/{} items",
        room.x1,
        room.y1,
        placed_monsters,
        num_monsters,
        placed_items,
        num_items
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DepthTable, MonsterKind};
    use crate::game::colors;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn crowded_tables() -> SpawnTables {
        let mut tables = SpawnTables::default();
        tables.max_monsters_per_room = DepthTable::new(vec![(1, 10)]);
        tables.max_items_per_room = DepthTable::new(vec![(1, 10)]);
        tables
    }

    #[test]
    fn test_spawns_stay_inside_room() {
        let mut rng = StdRng::seed_from_u64(7);
        let room = Room::new(10, 10, 8, 6);
        let mut entities = Vec::new();

        for _ in 0..20 {
            place_entities(&mut rng, &room, 5, &crowded_tables(), &mut entities).unwrap();
        }

        assert!(!entities.is_empty());
        for e in &entities {
            assert!(e.pos.x > room.x1 && e.pos.x < room.x2);
            assert!(e.pos.y > room.y1 && e.pos.y < room.y2);
        }
    }

    #[test]
    fn test_room_without_interior_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut entities = Vec::new();

        for room in [Room::new(0, 0, 1, 1), Room::new(5, 5, 1, 6), Room::new(9, 0, 6, 0)] {
            place_entities(&mut rng, &room, 8, &crowded_tables(), &mut entities).unwrap();
        }

        assert!(entities.is_empty());
    }

    #[test]
    fn test_no_two_spawns_share_a_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let room = Room::new(0, 0, 4, 4);
        let mut entities = Vec::new();

        for _ in 0..10 {
            place_entities(&mut rng, &room, 8, &crowded_tables(), &mut entities).unwrap();
        }

        // A 4x4 room has only 9 interior cells
        assert!(entities.len() <= 9);
        for (i, a) in entities.iter().enumerate() {
            assert!(entities[i + 1..].iter().all(|b| b.pos != a.pos));
        }
    }

    #[test]
    fn test_full_room_gains_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let room = Room::new(0, 0, 5, 5);
        let mut entities: Vec<Entity> = room
            .interior()
            .map(|pos| Entity::new(pos, 'x', colors::WHITE, "Crate"))
            .collect();
        let before = entities.len();

        for _ in 0..50 {
            place_entities(&mut rng, &room, 10, &crowded_tables(), &mut entities).unwrap();
        }

        assert_eq!(entities.len(), before);
    }

    #[test]
    fn test_zero_caps_spawn_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tables = SpawnTables::default();
        tables.max_monsters_per_room = DepthTable::new(vec![(3, 2)]);
        tables.max_items_per_room = DepthTable::new(vec![(3, 2)]);
        let mut entities = Vec::new();

        for _ in 0..20 {
            place_entities(&mut rng, &Room::new(0, 0, 8, 8), 1, &tables, &mut entities).unwrap();
        }
        assert!(entities.is_empty());
    }

    #[test]
    fn test_trolls_locked_before_depth_three() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut entities = Vec::new();

        for i in 0..40 {
            let room = Room::new((i % 8) * 10, (i / 8) * 10, 9, 9);
            place_entities(&mut rng, &room, 2, &crowded_tables(), &mut entities).unwrap();
        }

        let troll = MonsterKind::Troll.template().name;
        assert!(entities.iter().any(|e| e.fighter.is_some()));
        assert!(entities.iter().all(|e| e.name != troll));
    }
}
