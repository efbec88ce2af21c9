//! Spawn tables
//!
//! How many monsters and items a room may hold, and how likely each kind is,
//! as functions of depth.

use serde::{Deserialize, Serialize};

use super::items::ItemKind;
use super::monsters::MonsterKind;
use super::tables::{DepthTable, WeightEntry};

/// All depth-scaled spawn data for floor generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTables {
    /// Upper bound on monsters rolled per room
    pub max_monsters_per_room: DepthTable,
    /// Upper bound on items rolled per room
    pub max_items_per_room: DepthTable,
    /// Monster weights, in draw order
    pub monsters: Vec<(MonsterKind, WeightEntry)>,
    /// Item weights, in draw order
    pub items: Vec<(ItemKind, WeightEntry)>,
}

impl Default for SpawnTables {
    fn default() -> Self {
        Self {
            max_monsters_per_room: DepthTable::new(vec![(1, 2), (4, 3), (6, 5)]),
            max_items_per_room: DepthTable::new(vec![(1, 1), (4, 2)]),
            monsters: vec![
                (MonsterKind::Orc, WeightEntry::Fixed(80)),
                (
                    MonsterKind::Troll,
                    WeightEntry::ByDepth(DepthTable::new(vec![(3, 15), (5, 30), (7, 60)])),
                ),
            ],
            items: vec![
                (ItemKind::HealingPotion, WeightEntry::Fixed(35)),
                (ItemKind::Sword, WeightEntry::ByDepth(DepthTable::new(vec![(4, 5)]))),
                (ItemKind::Shield, WeightEntry::ByDepth(DepthTable::new(vec![(8, 15)]))),
                (
                    ItemKind::LightningScroll,
                    WeightEntry::ByDepth(DepthTable::new(vec![(4, 25)])),
                ),
                (
                    ItemKind::FireballScroll,
                    WeightEntry::ByDepth(DepthTable::new(vec![(6, 25)])),
                ),
                (
                    ItemKind::ConfusionScroll,
                    WeightEntry::ByDepth(DepthTable::new(vec![(2, 10)])),
                ),
            ],
        }
    }
}
