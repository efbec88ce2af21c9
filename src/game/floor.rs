//! The current dungeon floor
//!
//! Owns the map and every entity on it. `entities[0]` is always the player;
//! items move between the ground (this list) and the player's inventory.

use rand::Rng;

use super::colors;
use super::config::GameConfig;
use super::messages::{Message, MessageLog};
use crate::data::SpawnTables;
use crate::ecs::{Entity, EntityId, Position};
use crate::items::{self, AddOutcome, EffectContext, UseOutcome, UseParams};
use crate::world::generation::{generate_floor, Room};
use crate::world::{compute_fov, Map};
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone)]
pub struct Floor {
    pub map: Map,
    entities: Vec<Entity>,
    rooms: Vec<Room>,
    depth: u32,
    spawns: SpawnTables,
}

impl Floor {
    /// Generate the first floor around `player`
    pub fn new(
        rng: &mut impl Rng,
        config: &GameConfig,
        spawns: &SpawnTables,
        player: Entity,
    ) -> CoreResult<Self> {
        Self::at_depth(rng, 1, config, spawns, player)
    }

    /// Generate a floor at a given depth
    pub fn at_depth(
        rng: &mut impl Rng,
        depth: u32,
        config: &GameConfig,
        spawns: &SpawnTables,
        player: Entity,
    ) -> CoreResult<Self> {
        let generated = generate_floor(rng, depth, &config.dungeon, spawns, player)?;
        Ok(Self {
            map: generated.map,
            entities: generated.entities,
            rooms: generated.rooms,
            depth,
            spawns: spawns.clone(),
        })
    }

    /// Descend: regenerate everything below the player, who rests on the way
    pub fn next_floor(
        &mut self,
        rng: &mut impl Rng,
        log: &mut MessageLog,
        config: &GameConfig,
    ) -> CoreResult<()> {
        let depth = self.depth + 1;
        // Keep the current floor intact if generation fails
        let player = self.player().clone();
        let generated = generate_floor(rng, depth, &config.dungeon, &self.spawns, player)
            .map_err(|e| {
                log::warn!("Failed to generate floor {}: {}", depth, e);
                e
            })?;

        self.map = generated.map;
        self.entities = generated.entities;
        self.rooms = generated.rooms;
        self.depth = depth;

        let player = self.player_mut();
        let max_hp = player.max_hp();
        if let Some(fighter) = player.fighter.as_mut() {
            fighter.heal(max_hp / 2, max_hp);
        }

        log.add_message(Message::plain(
            "You rest briefly in the staircase and feel restored.",
        ));
        log::info!("Descended to floor {}", depth);
        Ok(())
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Player first, then monsters and items, then the stairs
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn player(&self) -> &Entity {
        &self.entities[0]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.entities[0]
    }

    fn split_player(&mut self) -> (&mut Entity, &mut [Entity]) {
        let (player, others) = self.entities.split_at_mut(1);
        (&mut player[0], others)
    }

    pub fn stairs_position(&self) -> Option<Position> {
        self.entities
            .iter()
            .find(|e| e.stairs.is_some())
            .map(|e| e.pos)
    }

    /// Whether the terrain at `(x, y)` stops movement
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.map.is_blocked(x, y)
    }

    /// First movement-blocking entity standing on `pos`
    pub fn blocking_entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities.iter().find(|e| e.blocks && e.at(pos))
    }

    /// Pick up the first item under the player. Returns whether anything
    /// was taken.
    pub fn pick_up(&mut self, log: &mut MessageLog) -> CoreResult<bool> {
        let pos = self.player().pos;
        let Some(index) = self
            .entities
            .iter()
            .skip(1)
            .position(|e| e.item.is_some() && e.at(pos))
            .map(|i| i + 1)
        else {
            log.add_message(Message::new("There is nothing here to pick up.", colors::YELLOW));
            return Ok(false);
        };

        let item = self.entities[index].clone();
        let player = self.player_mut();
        let player_id = player.id;
        let inventory = player
            .inventory
            .as_mut()
            .ok_or(CoreError::MissingComponent {
                entity: player_id,
                component: "inventory",
            })?;

        match inventory.add_item(item) {
            AddOutcome::Added { message } => {
                log.add_message(message);
                self.entities.remove(index);
                Ok(true)
            }
            AddOutcome::Rejected { message, .. } => {
                log.add_message(message);
                Ok(false)
            }
        }
    }

    /// Use a carried item, resolving sight from the player's position.
    ///
    /// Messages go to `log`; equip requests are carried out here. Deaths are
    /// returned for the caller to resolve.
    pub fn use_item(
        &mut self,
        item_id: EntityId,
        params: &UseParams,
        log: &mut MessageLog,
        fov_radius: i32,
    ) -> CoreResult<Vec<UseOutcome>> {
        let fov = compute_fov(&self.map, self.player().pos, fov_radius);
        let (player, others) = self.split_player();
        let mut ctx = EffectContext::new(others, &fov);
        let outcomes = items::use_item(player, item_id, params, &mut ctx)?;

        for outcome in &outcomes {
            match outcome {
                UseOutcome::Message(message) => log.add_message(message.clone()),
                UseOutcome::Equip { item } => self.equip_item(*item, log)?,
                UseOutcome::Targeting {
                    prompt: Some(prompt),
                    ..
                } => log.add_message(prompt.clone()),
                UseOutcome::Dead { entity, xp } => {
                    log::debug!("Entity {} killed by item effect ({} xp)", entity, xp)
                }
                _ => {}
            }
        }

        Ok(outcomes)
    }

    /// Drop a carried item at the player's feet
    pub fn drop_item(&mut self, item_id: EntityId, log: &mut MessageLog) -> CoreResult<()> {
        let dropped = items::drop_item(self.player_mut(), item_id)?;
        log.add_message(dropped.message);
        self.entities.push(dropped.item);
        Ok(())
    }

    /// Equip or unequip a carried item
    pub fn equip_item(&mut self, item_id: EntityId, log: &mut MessageLog) -> CoreResult<()> {
        let messages = items::equip_item(self.player_mut(), item_id)?;
        log.extend(messages);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ItemKind, MonsterKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn first_floor(seed: u64) -> (Floor, GameConfig) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = GameConfig::default();
        let floor = Floor::new(&mut rng, &config, &SpawnTables::default(), config.new_player())
            .unwrap();
        (floor, config)
    }

    #[test]
    fn test_new_floor_places_player_first() {
        let (floor, _) = first_floor(7);
        assert_eq!(floor.depth(), 1);
        assert_eq!(floor.player().name, "Player");
        assert_eq!(floor.player().pos, floor.rooms()[0].center());
        assert!(!floor.is_blocked(floor.player().pos.x, floor.player().pos.y));
    }

    #[test]
    fn test_next_floor_heals_and_regenerates() {
        let (mut floor, config) = first_floor(11);
        let mut rng = StdRng::seed_from_u64(12);
        let mut log = MessageLog::default();
        let player_id = floor.player().id;
        floor.player_mut().fighter.as_mut().unwrap().hp = 10;

        floor.next_floor(&mut rng, &mut log, &config).unwrap();

        assert_eq!(floor.depth(), 2);
        assert_eq!(floor.player().id, player_id);
        assert_eq!(floor.player().fighter.unwrap().hp, 60);
        let rest = log.last().unwrap();
        assert_eq!(rest.text, "You rest briefly in the staircase and feel restored.");
        assert_eq!(rest.color, colors::WHITE);
        let stairs: Vec<_> = floor.entities().iter().filter(|e| e.stairs.is_some()).collect();
        assert_eq!(stairs.len(), 1);
        assert_eq!(stairs[0].stairs.unwrap().floor, 3);
    }

    #[test]
    fn test_blocking_entity_at() {
        let (mut floor, _) = first_floor(13);
        assert!(floor.rooms().len() > 1);
        let last = *floor.rooms().last().unwrap();
        let stairs = floor.stairs_position().unwrap();
        assert_eq!(stairs, last.center());

        let player_id = floor.player().id;
        floor.entities.retain(|e| e.id == player_id || e.stairs.is_some());
        let orc = MonsterKind::Orc.template().spawn(Position::new(last.x1 + 1, last.y1 + 1));
        let orc_id = orc.id;
        floor.entities.push(orc);
        let potion_pos = Position::new(last.x1 + 2, last.y1 + 1);
        floor.entities.push(ItemKind::HealingPotion.spawn(potion_pos));

        let found = floor.blocking_entity_at(Position::new(last.x1 + 1, last.y1 + 1));
        assert_eq!(found.map(|e| e.id), Some(orc_id));
        assert!(floor.blocking_entity_at(potion_pos).is_none());
        assert!(floor.blocking_entity_at(stairs).is_none());
    }

    #[test]
    fn test_pick_up_and_drop() {
        let (mut floor, _) = first_floor(3);
        let mut log = MessageLog::default();
        let pos = floor.player().pos;
        let potion = ItemKind::HealingPotion.spawn(pos);
        let potion_id = potion.id;
        floor.entities.push(potion);

        assert!(floor.pick_up(&mut log).unwrap());
        assert_eq!(log.last().unwrap().text, "You pick up the Healing Potion.");
        assert!(floor.entities().iter().all(|e| e.id != potion_id));

        floor.drop_item(potion_id, &mut log).unwrap();
        assert_eq!(log.last().unwrap().text, "You dropped the Healing Potion.");
        assert!(floor.entities().iter().any(|e| e.id == potion_id && e.pos == pos));
    }

    #[test]
    fn test_pick_up_nothing() {
        let (mut floor, _) = first_floor(5);
        let mut log = MessageLog::default();
        let pos = floor.player().pos;
        floor.entities.retain(|e| e.item.is_none() || e.pos != pos);

        assert!(!floor.pick_up(&mut log).unwrap());
        assert_eq!(log.last().unwrap().text, "There is nothing here to pick up.");
    }

    #[test]
    fn test_using_sword_equips_it() {
        let (mut floor, config) = first_floor(9);
        let mut log = MessageLog::default();
        let sword = ItemKind::Sword.spawn(floor.player().pos);
        let sword_id = sword.id;
        floor
            .player_mut()
            .inventory
            .as_mut()
            .unwrap()
            .add_item(sword);

        floor
            .use_item(sword_id, &UseParams::default(), &mut log, config.fov_radius)
            .unwrap();

        assert_eq!(floor.player().power(), 5);
        assert_eq!(log.last().unwrap().text, "You equipped the Sword");
    }
}
