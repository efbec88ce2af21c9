//! Inventory system
//!
//! A capacity-bounded list of carried item entities and the rules for using,
//! equipping and dropping them. Nothing here touches the message log; every
//! operation hands back outcomes for the caller to apply.

use serde::{Deserialize, Serialize};

use super::effects::EffectContext;
use super::equipment::{EquipOutcome, Equipment};
use super::item::EquipSlot;
use crate::ecs::{Entity, EntityId, Position};
use crate::game::colors;
use crate::game::Message;
use crate::{CoreError, CoreResult};

/// Default inventory size (one slot per letter a-z)
pub const DEFAULT_CAPACITY: usize = 26;

/// Result of trying to pick something up
#[derive(Debug, Clone)]
pub enum AddOutcome {
    Added { message: Message },
    /// Inventory full; the item is handed back untouched
    Rejected { item: Box<Entity>, message: Message },
}

impl AddOutcome {
    pub fn message(&self) -> &Message {
        match self {
            AddOutcome::Added { message } | AddOutcome::Rejected { message, .. } => message,
        }
    }
}

/// One thing that happened while using an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    Message(Message),
    /// The item was used up and has left the inventory
    Consumed { item: EntityId },
    /// The item has no use effect but can be worn; equip it instead
    Equip { item: EntityId },
    /// The effect needs a target cell before it can run
    Targeting {
        item: EntityId,
        prompt: Option<Message>,
    },
    /// A fighter was killed by the effect
    Dead { entity: EntityId, xp: u32 },
}

/// Per-use arguments: the chosen target and optional parameter overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseParams {
    pub target: Option<Position>,
    pub amount: Option<i32>,
    pub damage: Option<i32>,
    pub radius: Option<i32>,
    pub max_range: Option<i32>,
    pub turns: Option<u32>,
}

impl UseParams {
    pub fn targeting(target: Position) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }
}

/// An item removed from an inventory, ready to be placed on the ground
#[derive(Debug, Clone)]
pub struct Dropped {
    pub item: Entity,
    pub message: Message,
    /// Slot the item was taken out of, if it was equipped
    pub dequipped: Option<EquipSlot>,
}

/// Container of carried items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    capacity: usize,
    items: Vec<Entity>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Carried items in pickup order
    pub fn items(&self) -> &[Entity] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add an item, or hand it back if there is no room
    pub fn add_item(&mut self, item: Entity) -> AddOutcome {
        if self.is_full() {
            return AddOutcome::Rejected {
                item: Box::new(item),
                message: Message::new("You can't carry any more. Drop something first.", colors::YELLOW),
            };
        }

        let message = Message::new(format!("You pick up the {}.", item.name), colors::BLUE);
        self.items.push(item);
        AddOutcome::Added { message }
    }

    /// Remove an item by ID
    pub fn remove_item(&mut self, id: EntityId) -> CoreResult<Entity> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CoreError::ItemNotCarried(id))?;
        Ok(self.items.remove(index))
    }

    /// Menu lines for the carried items, noting where equipped ones sit
    pub fn labels(&self, equipment: &Equipment) -> Vec<String> {
        if self.items.is_empty() {
            return vec!["Inventory is empty.".to_string()];
        }

        self.items
            .iter()
            .map(|item| match equipment.slot_of(item.id) {
                Some(slot) if slot.is_held() => format!("{} held in {}", item.name, slot.name()),
                Some(slot) => format!("{} worn on {}", item.name, slot.name()),
                None => item.name.clone(),
            })
            .collect()
    }
}

fn inventory_of(owner: &Entity) -> CoreResult<&Inventory> {
    owner.inventory.as_ref().ok_or(CoreError::MissingComponent {
        entity: owner.id,
        component: "inventory",
    })
}

fn inventory_of_mut(owner: &mut Entity) -> CoreResult<&mut Inventory> {
    let entity = owner.id;
    owner.inventory.as_mut().ok_or(CoreError::MissingComponent {
        entity,
        component: "inventory",
    })
}

/// Use a carried item.
///
/// Items without an effect are either equipped (via [`UseOutcome::Equip`])
/// or refused. Targeted effects without a target ask for one. Otherwise the
/// effect runs with `params` merged over its defaults, and a
/// [`UseOutcome::Consumed`] among the results removes the item.
pub fn use_item(
    owner: &mut Entity,
    item_id: EntityId,
    params: &UseParams,
    ctx: &mut EffectContext<'_>,
) -> CoreResult<Vec<UseOutcome>> {
    let item = inventory_of(owner)?
        .get(item_id)
        .ok_or(CoreError::ItemNotCarried(item_id))?;
    let component = item.item.as_ref().ok_or(CoreError::MissingComponent {
        entity: item_id,
        component: "item",
    })?;

    let Some(effect) = component.effect else {
        if item.equippable.is_some() {
            return Ok(vec![UseOutcome::Equip { item: item_id }]);
        }
        return Ok(vec![UseOutcome::Message(Message::new(
            format!("You can't use a {} right now.", item.name),
            colors::YELLOW,
        ))]);
    };

    if component.targeting && params.target.is_none() {
        return Ok(vec![UseOutcome::Targeting {
            item: item_id,
            prompt: component.targeting_message.clone(),
        }]);
    }

    let results = effect
        .with_overrides(params)
        .apply(owner, item_id, params.target, ctx);

    if results.iter().any(|r| matches!(r, UseOutcome::Consumed { .. })) {
        if let Some(equipment) = owner.equipment.as_mut() {
            equipment.dequip(item_id);
        }
        inventory_of_mut(owner)?.remove_item(item_id)?;
        log::debug!("{} consumed item {}", owner.name, item_id);
    }

    Ok(results)
}

/// Take an item out of the owner's inventory and set it down at their feet.
///
/// An equipped item is unequipped first so no slot keeps pointing at it.
pub fn drop_item(owner: &mut Entity, item_id: EntityId) -> CoreResult<Dropped> {
    if !inventory_of(owner)?.contains(item_id) {
        return Err(CoreError::ItemNotCarried(item_id));
    }

    let dequipped = owner
        .equipment
        .as_mut()
        .and_then(|equipment| equipment.dequip(item_id));

    let pos = owner.pos;
    let mut item = inventory_of_mut(owner)?.remove_item(item_id)?;
    item.pos = pos;

    let message = Message::new(format!("You dropped the {}.", item.name), colors::YELLOW);
    Ok(Dropped {
        item,
        message,
        dequipped,
    })
}

/// Toggle a carried item in or out of its equipment slot
pub fn equip_item(owner: &mut Entity, item_id: EntityId) -> CoreResult<Vec<Message>> {
    let item = inventory_of(owner)?
        .get(item_id)
        .ok_or(CoreError::ItemNotCarried(item_id))?;
    let slot = item
        .equippable
        .map(|e| e.slot)
        .ok_or(CoreError::NotEquippable(item_id))?;

    let owner_id = owner.id;
    let outcomes = owner
        .equipment
        .as_mut()
        .ok_or(CoreError::MissingComponent {
            entity: owner_id,
            component: "equipment",
        })?
        .toggle_equip(item_id, slot);

    let inventory = inventory_of(owner)?;
    let name_of = |id: EntityId| {
        inventory
            .get(id)
            .map_or_else(|| id.to_string(), |item| item.name.clone())
    };

    Ok(outcomes
        .into_iter()
        .map(|outcome| match outcome {
            EquipOutcome::Equipped { item, .. } => {
                Message::plain(format!("You equipped the {}", name_of(item)))
            }
            EquipOutcome::Dequipped { item, .. } => {
                Message::plain(format!("You dequipped the {}", name_of(item)))
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemKind;
    use crate::ecs::Fighter;
    use crate::world::FieldOfView;

    fn player() -> Entity {
        Entity::new(Position::new(3, 3), '@', colors::WHITE, "Player")
            .with_fighter(Fighter::new(100, 1, 2, 0))
            .with_inventory(DEFAULT_CAPACITY)
            .with_equipment()
    }

    fn give(owner: &mut Entity, kind: ItemKind) -> EntityId {
        let item = kind.spawn(Position::new(0, 0));
        let id = item.id;
        assert!(matches!(
            owner.inventory.as_mut().unwrap().add_item(item),
            AddOutcome::Added { .. }
        ));
        id
    }

    fn use_plain(owner: &mut Entity, id: EntityId) -> Vec<UseOutcome> {
        let fov = FieldOfView::default();
        let mut nobody = Vec::new();
        let mut ctx = EffectContext::new(&mut nobody, &fov);
        use_item(owner, id, &UseParams::default(), &mut ctx).unwrap()
    }

    #[test]
    fn test_full_inventory_hands_item_back() {
        let mut inventory = Inventory::new(1);
        let first = ItemKind::HealingPotion.spawn(Position::new(0, 0));
        let second = ItemKind::Sword.spawn(Position::new(0, 0));
        let second_id = second.id;

        assert_eq!(inventory.add_item(first).message().text, "You pick up the Healing Potion.");
        match inventory.add_item(second) {
            AddOutcome::Rejected { item, message } => {
                assert_eq!(item.id, second_id);
                assert_eq!(message.color, colors::YELLOW);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut inventory = Inventory::new(5);
        assert!(matches!(
            inventory.remove_item(EntityId(u64::MAX)),
            Err(CoreError::ItemNotCarried(_))
        ));
    }

    #[test]
    fn test_potion_kept_at_full_health() {
        let mut owner = player();
        let potion = give(&mut owner, ItemKind::HealingPotion);

        let results = use_plain(&mut owner, potion);

        assert!(!results.iter().any(|r| matches!(r, UseOutcome::Consumed { .. })));
        assert!(owner.inventory.as_ref().unwrap().contains(potion));
    }

    #[test]
    fn test_potion_consumed_when_hurt() {
        let mut owner = player();
        owner.fighter.as_mut().unwrap().hp = 50;
        let potion = give(&mut owner, ItemKind::HealingPotion);

        let results = use_plain(&mut owner, potion);

        assert!(results.contains(&UseOutcome::Consumed { item: potion }));
        assert!(!owner.inventory.as_ref().unwrap().contains(potion));
        assert_eq!(owner.fighter.unwrap().hp, 90);
    }

    #[test]
    fn test_targeted_scroll_asks_for_target() {
        let mut owner = player();
        let scroll = give(&mut owner, ItemKind::FireballScroll);

        let results = use_plain(&mut owner, scroll);

        assert!(matches!(
            results.as_slice(),
            [UseOutcome::Targeting { item, prompt: Some(_) }] if *item == scroll
        ));
        assert!(owner.inventory.as_ref().unwrap().contains(scroll));
    }

    #[test]
    fn test_using_equipment_requests_equip() {
        let mut owner = player();
        let sword = give(&mut owner, ItemKind::Sword);
        assert_eq!(use_plain(&mut owner, sword), vec![UseOutcome::Equip { item: sword }]);
    }

    #[test]
    fn test_drop_equipped_clears_slot() {
        let mut owner = player();
        let shield = give(&mut owner, ItemKind::Shield);
        equip_item(&mut owner, shield).unwrap();
        assert_eq!(owner.defense(), 2);

        let dropped = drop_item(&mut owner, shield).unwrap();

        assert_eq!(dropped.dequipped, Some(EquipSlot::OffHand));
        assert_eq!(dropped.item.pos, owner.pos);
        assert_eq!(dropped.message.text, "You dropped the Shield.");
        assert!(!owner.equipment.as_ref().unwrap().is_equipped(shield));
        assert_eq!(owner.defense(), 1);
    }

    #[test]
    fn test_equip_messages() {
        let mut owner = player();
        let sword = give(&mut owner, ItemKind::Sword);

        let on = equip_item(&mut owner, sword).unwrap();
        assert_eq!(on[0].text, "You equipped the Sword");
        let off = equip_item(&mut owner, sword).unwrap();
        assert_eq!(off[0].text, "You dequipped the Sword");
    }

    #[test]
    fn test_equip_rejects_consumables() {
        let mut owner = player();
        let potion = give(&mut owner, ItemKind::HealingPotion);
        assert!(matches!(
            equip_item(&mut owner, potion),
            Err(CoreError::NotEquippable(_))
        ));
    }

    #[test]
    fn test_labels() {
        let mut owner = player();
        let empty = owner.inventory.as_ref().unwrap().labels(&Equipment::new());
        assert_eq!(empty, vec!["Inventory is empty."]);

        let sword = give(&mut owner, ItemKind::Sword);
        give(&mut owner, ItemKind::HealingPotion);
        equip_item(&mut owner, sword).unwrap();

        let labels = owner
            .inventory
            .as_ref()
            .unwrap()
            .labels(owner.equipment.as_ref().unwrap());
        assert_eq!(labels, vec!["Sword held in main hand", "Healing Potion"]);
    }
}
