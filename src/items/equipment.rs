//! Equipment system
//!
//! Tracks which carried items sit in which slot. Slots hold item IDs; the
//! items themselves stay in the owner's inventory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::item::EquipSlot;
use crate::ecs::EntityId;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome {
    Equipped { item: EntityId, slot: EquipSlot },
    Dequipped { item: EntityId, slot: EquipSlot },
}

/// Equipment slots of one entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    slots: BTreeMap<EquipSlot, EntityId>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Equip `item` into `slot`, or take it off if it is already there.
    ///
    /// Equipping into an occupied slot dequips the previous occupant first.
    pub fn toggle_equip(&mut self, item: EntityId, slot: EquipSlot) -> Vec<EquipOutcome> {
        let mut results = Vec::new();

        match self.slots.get(&slot) {
            Some(&current) if current == item => {
                self.slots.remove(&slot);
                results.push(EquipOutcome::Dequipped { item, slot });
            }
            current => {
                if let Some(&previous) = current {
                    results.push(EquipOutcome::Dequipped { item: previous, slot });
                }
                // An item occupies at most one slot
                if let Some(other) = self.slot_of(item) {
                    self.slots.remove(&other);
                    results.push(EquipOutcome::Dequipped { item, slot: other });
                }
                self.slots.insert(slot, item);
                results.push(EquipOutcome::Equipped { item, slot });
            }
        }

        results
    }

    /// Remove `item` from whatever slot holds it
    pub fn dequip(&mut self, item: EntityId) -> Option<EquipSlot> {
        let slot = self.slot_of(item)?;
        self.slots.remove(&slot);
        Some(slot)
    }

    /// Slot currently holding `item`
    pub fn slot_of(&self, item: EntityId) -> Option<EquipSlot> {
        self.slots
            .iter()
            .find(|(_, &id)| id == item)
            .map(|(&slot, _)| slot)
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.slot_of(item).is_some()
    }

    /// Get item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<EntityId> {
        self.slots.get(&slot).copied()
    }

    /// IDs of every equipped item
    pub fn equipped_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_dequips() {
        let mut equipment = Equipment::new();
        let sword = EntityId(1);

        let first = equipment.toggle_equip(sword, EquipSlot::MainHand);
        assert_eq!(first, vec![EquipOutcome::Equipped { item: sword, slot: EquipSlot::MainHand }]);
        assert_eq!(equipment.get(EquipSlot::MainHand), Some(sword));

        let second = equipment.toggle_equip(sword, EquipSlot::MainHand);
        assert_eq!(second, vec![EquipOutcome::Dequipped { item: sword, slot: EquipSlot::MainHand }]);
        assert!(!equipment.is_equipped(sword));
    }

    #[test]
    fn test_equip_replaces_occupant() {
        let mut equipment = Equipment::new();
        let old = EntityId(1);
        let new = EntityId(2);

        equipment.toggle_equip(old, EquipSlot::OffHand);
        let results = equipment.toggle_equip(new, EquipSlot::OffHand);

        assert_eq!(
            results,
            vec![
                EquipOutcome::Dequipped { item: old, slot: EquipSlot::OffHand },
                EquipOutcome::Equipped { item: new, slot: EquipSlot::OffHand },
            ]
        );
        assert!(!equipment.is_equipped(old));
    }

    #[test]
    fn test_dequip_unknown_item() {
        let mut equipment = Equipment::new();
        assert_eq!(equipment.dequip(EntityId(9)), None);
    }
}
