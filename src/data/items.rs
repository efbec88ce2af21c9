//! Item templates
//!
//! Each kind maps to one fixed effect or equipment block.

use serde::{Deserialize, Serialize};

use crate::ecs::{Entity, Position, RenderOrder};
use crate::game::colors;
use crate::game::Message;
use crate::items::{EquipSlot, Equippable, ItemComponent, ItemEffect};

/// Item kinds that spawn tables can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    HealingPotion,
    Sword,
    Shield,
    LightningScroll,
    FireballScroll,
    ConfusionScroll,
}

impl ItemKind {
    /// Build a ground item of this kind at `pos`
    pub fn spawn(self, pos: Position) -> Entity {
        match self {
            ItemKind::HealingPotion => Entity::new(pos, '!', colors::VIOLET, "Healing Potion")
                .with_render_order(RenderOrder::Item)
                .with_item(ItemComponent::new(ItemEffect::Heal { amount: 40 })),
            ItemKind::Sword => Entity::new(pos, '/', colors::SKY, "Sword")
                .with_render_order(RenderOrder::Item)
                .with_item(ItemComponent::inert())
                .with_equippable(Equippable::new(EquipSlot::MainHand).with_power(3)),
            ItemKind::Shield => Entity::new(pos, '[', colors::DARKER_ORANGE, "Shield")
                .with_render_order(RenderOrder::Item)
                .with_item(ItemComponent::inert())
                .with_equippable(Equippable::new(EquipSlot::OffHand).with_defense(1)),
            ItemKind::LightningScroll => Entity::new(pos, '#', colors::YELLOW, "Lightning Scroll")
                .with_render_order(RenderOrder::Item)
                .with_item(ItemComponent::new(ItemEffect::Lightning {
                    damage: 40,
                    max_range: 7,
                })),
            ItemKind::FireballScroll => Entity::new(pos, '#', colors::LIGHT_CRIMSON, "Fireball Scroll")
                .with_render_order(RenderOrder::Item)
                .with_item(
                    ItemComponent::new(ItemEffect::Fireball {
                        damage: 25,
                        radius: 3,
                    })
                    .targeted(Message::new(
                        "You ready a fireball. (Left click to cast, right click to cancel.)",
                        colors::LIGHT_CYAN,
                    )),
                ),
            ItemKind::ConfusionScroll => Entity::new(pos, '#', colors::LIGHT_PURPLE, "Confuse Scroll")
                .with_render_order(RenderOrder::Item)
                .with_item(
                    ItemComponent::new(ItemEffect::Confuse { turns: 10 }).targeted(Message::new(
                        "You prepare to daze a creature. (Left click to cast, right click to cancel.)",
                        colors::LIGHT_CYAN,
                    )),
                ),
        }
    }
}
