//! Tile definitions

use serde::{Deserialize, Serialize};

/// A single cell of the floor grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Blocks movement
    pub blocked: bool,
    /// Blocks line of sight
    pub block_sight: bool,
}

impl Tile {
    /// Solid rock, the state every tile starts in
    pub fn wall() -> Self {
        Self {
            blocked: true,
            block_sight: true,
        }
    }

    /// Carved, passable, see-through floor
    pub fn floor() -> Self {
        Self {
            blocked: false,
            block_sight: false,
        }
    }

    pub fn is_walkable(&self) -> bool {
        !self.blocked
    }

    pub fn is_transparent(&self) -> bool {
        !self.block_sight
    }

    pub fn glyph(&self) -> char {
        if self.blocked {
            '#'
        } else {
            '.'
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}
