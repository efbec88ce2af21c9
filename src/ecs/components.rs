//! Entity components
//!
//! Capabilities an entity may carry. Each one is a plain typed struct stored
//! in an optional field on [`Entity`](super::Entity).

use serde::{Deserialize, Serialize};

// ============================================================================
// Position
// ============================================================================

/// Position in the game world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, used for effect ranges and blast radii
    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

// ============================================================================
// Rendering hints
// ============================================================================

/// Draw order for entities sharing a cell (higher = on top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RenderOrder {
    Stairs,
    Corpse,
    Item,
    Actor,
}

// ============================================================================
// Combat Stats
// ============================================================================

/// Hit points and base combat stats.
///
/// Stored values are the base ones; equipment bonuses are added by
/// [`Entity::max_hp`](super::Entity::max_hp) and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub hp: i32,
    pub base_max_hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
    /// Experience awarded to whoever kills this fighter
    pub xp: u32,
}

impl Fighter {
    pub fn new(hp: i32, defense: i32, power: i32, xp: u32) -> Self {
        Self {
            hp,
            base_max_hp: hp,
            base_defense: defense,
            base_power: power,
            xp,
        }
    }

    /// Subtract hit points, returning true when this blow was fatal
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.hp > 0;
        self.hp -= amount;
        was_alive && self.hp <= 0
    }

    /// Restore hit points up to `max_hp`, returning the amount actually healed
    pub fn heal(&mut self, amount: i32, max_hp: i32) -> i32 {
        let actual = amount.min(max_hp - self.hp).max(0);
        self.hp += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

// ============================================================================
// AI
// ============================================================================

/// Which behaviour script drives a monster. The scripts themselves live
/// outside this crate; only the state they need is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Walk toward the player when visible and attack when adjacent
    Basic,
    /// Stumble randomly, then revert to `previous`
    Confused { previous: Box<Ai>, turns_left: u32 },
}

impl Ai {
    pub fn is_confused(&self) -> bool {
        matches!(self, Ai::Confused { .. })
    }
}

// ============================================================================
// Level features
// ============================================================================

/// Descent point to the next floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stairs {
    /// Floor reached by taking these stairs
    pub floor: u32,
}
