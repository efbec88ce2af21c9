//! Item definitions
//!
//! The capabilities that make an entity usable or wearable.

use serde::{Deserialize, Serialize};

use super::effects::ItemEffect;
use crate::game::Message;

/// Marks an entity as an item that can be picked up and used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemComponent {
    /// What happens on use; `None` for equipment and junk
    pub effect: Option<ItemEffect>,
    /// Effect needs a target cell chosen by the player
    pub targeting: bool,
    /// Prompt shown when targeting starts
    pub targeting_message: Option<Message>,
}

impl ItemComponent {
    pub fn new(effect: ItemEffect) -> Self {
        Self {
            effect: Some(effect),
            targeting: false,
            targeting_message: None,
        }
    }

    /// An item with no use effect
    pub fn inert() -> Self {
        Self {
            effect: None,
            targeting: false,
            targeting_message: None,
        }
    }

    /// Require a target cell before the effect runs
    pub fn targeted(mut self, prompt: Message) -> Self {
        self.targeting = true;
        self.targeting_message = Some(prompt);
        self
    }
}

/// Equipment slot for wearable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipSlot {
    MainHand,
    OffHand,
    Head,
    Chest,
    Hands,
    Legs,
    Feet,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::MainHand => "main hand",
            EquipSlot::OffHand => "off hand",
            EquipSlot::Head => "head",
            EquipSlot::Chest => "chest",
            EquipSlot::Hands => "hands",
            EquipSlot::Legs => "legs",
            EquipSlot::Feet => "feet",
        }
    }

    /// Held items are "held in", worn items are "worn on"
    pub fn is_held(&self) -> bool {
        matches!(self, EquipSlot::MainHand | EquipSlot::OffHand)
    }
}

/// Marks an item as equippable and lists its stat bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equippable {
    pub slot: EquipSlot,
    pub power_bonus: i32,
    pub defense_bonus: i32,
    pub max_hp_bonus: i32,
}

impl Equippable {
    pub fn new(slot: EquipSlot) -> Self {
        Self {
            slot,
            power_bonus: 0,
            defense_bonus: 0,
            max_hp_bonus: 0,
        }
    }

    pub fn with_power(mut self, bonus: i32) -> Self {
        self.power_bonus = bonus;
        self
    }

    pub fn with_defense(mut self, bonus: i32) -> Self {
        self.defense_bonus = bonus;
        self
    }

    pub fn with_max_hp(mut self, bonus: i32) -> Self {
        self.max_hp_bonus = bonus;
        self
    }
}
