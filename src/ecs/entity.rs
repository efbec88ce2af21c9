//! The entity struct
//!
//! Every object on a floor (player, monsters, items, stairs) is an `Entity`.
//! Capabilities are optional fields, so "can this fight?" is
//! `entity.fighter.is_some()`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::components::{Ai, Fighter, Position, RenderOrder, Stairs};
use crate::game::colors::Rgb;
use crate::items::{Equipment, Equippable, Inventory, ItemComponent};

/// Counter for generating unique entity IDs
static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Allocate the next unused ID
    pub fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A thing on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Position,
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    /// Blocks movement into its cell
    pub blocks: bool,
    pub render_order: RenderOrder,

    pub fighter: Option<Fighter>,
    pub ai: Option<Ai>,
    pub item: Option<ItemComponent>,
    pub equippable: Option<Equippable>,
    pub stairs: Option<Stairs>,
    pub inventory: Option<Inventory>,
    pub equipment: Option<Equipment>,
}

impl Entity {
    /// Create a bare entity with no capabilities
    pub fn new(pos: Position, glyph: char, color: Rgb, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::next(),
            pos,
            glyph,
            color,
            name: name.into(),
            blocks: false,
            render_order: RenderOrder::Corpse,
            fighter: None,
            ai: None,
            item: None,
            equippable: None,
            stairs: None,
            inventory: None,
            equipment: None,
        }
    }

    pub fn blocking(mut self) -> Self {
        self.blocks = true;
        self
    }

    pub fn with_render_order(mut self, order: RenderOrder) -> Self {
        self.render_order = order;
        self
    }

    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    pub fn with_ai(mut self, ai: Ai) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn with_item(mut self, item: ItemComponent) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_equippable(mut self, equippable: Equippable) -> Self {
        self.equippable = Some(equippable);
        self
    }

    pub fn with_stairs(mut self, stairs: Stairs) -> Self {
        self.stairs = Some(stairs);
        self
    }

    pub fn with_inventory(mut self, capacity: usize) -> Self {
        self.inventory = Some(Inventory::new(capacity));
        self
    }

    pub fn with_equipment(mut self) -> Self {
        self.equipment = Some(Equipment::new());
        self
    }

    pub fn at(&self, pos: Position) -> bool {
        self.pos == pos
    }

    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.pos.euclidean_distance(&other.pos)
    }

    /// Equippable capabilities of every item this entity has equipped
    fn equipped_bonuses(&self) -> impl Iterator<Item = &Equippable> {
        let equipped: Vec<EntityId> = self
            .equipment
            .as_ref()
            .map(|e| e.equipped_ids().collect())
            .unwrap_or_default();
        self.inventory
            .iter()
            .flat_map(|inv| inv.items())
            .filter(move |item| equipped.contains(&item.id))
            .filter_map(|item| item.equippable.as_ref())
    }

    /// Maximum hit points including equipment, or 0 for non-fighters
    pub fn max_hp(&self) -> i32 {
        let base = self.fighter.map_or(0, |f| f.base_max_hp);
        base + self.equipped_bonuses().map(|e| e.max_hp_bonus).sum::<i32>()
    }

    pub fn power(&self) -> i32 {
        let base = self.fighter.map_or(0, |f| f.base_power);
        base + self.equipped_bonuses().map(|e| e.power_bonus).sum::<i32>()
    }

    pub fn defense(&self) -> i32 {
        let base = self.fighter.map_or(0, |f| f.base_defense);
        base + self.equipped_bonuses().map(|e| e.defense_bonus).sum::<i32>()
    }
}
