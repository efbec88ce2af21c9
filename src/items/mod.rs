//! Item system

pub mod effects;
pub mod equipment;
pub mod inventory;
pub mod item;

pub use effects::{EffectContext, ItemEffect};
pub use equipment::{EquipOutcome, Equipment};
pub use inventory::{
    drop_item, equip_item, use_item, AddOutcome, Dropped, Inventory, UseOutcome, UseParams,
    DEFAULT_CAPACITY,
};
pub use item::{EquipSlot, Equippable, ItemComponent};
