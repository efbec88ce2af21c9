//! Monster templates
//!
//! Each kind maps to one fixed stat block.

use serde::{Deserialize, Serialize};

use crate::ecs::{Ai, Entity, Fighter, Position, RenderOrder};
use crate::game::colors::{self, Rgb};

/// Monster kinds that spawn tables can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Orc,
    Troll,
    Dragon,
}

/// Fixed stats for one monster kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub color: Rgb,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub xp: u32,
}

impl MonsterKind {
    pub fn template(self) -> MonsterTemplate {
        match self {
            MonsterKind::Orc => MonsterTemplate {
                name: "Orc",
                glyph: 'o',
                color: colors::DESATURATED_GREEN,
                hp: 20,
                defense: 0,
                power: 4,
                xp: 35,
            },
            MonsterKind::Troll => MonsterTemplate {
                name: "Troll",
                glyph: 'T',
                color: colors::DARKER_GREEN,
                hp: 30,
                defense: 2,
                power: 8,
                xp: 100,
            },
            MonsterKind::Dragon => MonsterTemplate {
                name: "Dragon",
                glyph: 'D',
                color: colors::DARKER_RED,
                hp: 40,
                defense: 2,
                power: 6,
                xp: 250,
            },
        }
    }
}

impl MonsterTemplate {
    /// Build a live monster at `pos`
    pub fn spawn(&self, pos: Position) -> Entity {
        Entity::new(pos, self.glyph, self.color, self.name)
            .blocking()
            .with_render_order(RenderOrder::Actor)
            .with_fighter(Fighter::new(self.hp, self.defense, self.power, self.xp))
            .with_ai(Ai::Basic)
    }
}
