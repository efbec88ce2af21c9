//! Item use effects
//!
//! A closed set of effects, each a variant carrying its default parameters.
//! Effects report what happened as [`UseOutcome`]s; whether the item is used
//! up is decided by the effect itself through [`UseOutcome::Consumed`].

use serde::{Deserialize, Serialize};

use super::inventory::{UseOutcome, UseParams};
use crate::ecs::{Ai, Entity, EntityId, Position};
use crate::game::colors;
use crate::game::Message;
use crate::world::FieldOfView;

/// Everything an effect may touch besides its caster
pub struct EffectContext<'a> {
    /// Every entity on the floor except the caster
    pub others: &'a mut [Entity],
    /// Cells the caster can currently see
    pub fov: &'a FieldOfView,
}

impl<'a> EffectContext<'a> {
    pub fn new(others: &'a mut [Entity], fov: &'a FieldOfView) -> Self {
        Self { others, fov }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restore hit points to the user
    Heal { amount: i32 },
    /// Strike the closest visible fighter within range
    Lightning { damage: i32, max_range: i32 },
    /// Damage every fighter near a chosen cell, the caster included
    Fireball { damage: i32, radius: i32 },
    /// Confuse the monster standing on a chosen cell
    Confuse { turns: u32 },
}

impl ItemEffect {
    /// Replace default parameters with any overrides given for this use
    pub fn with_overrides(self, params: &UseParams) -> Self {
        match self {
            ItemEffect::Heal { amount } => ItemEffect::Heal {
                amount: params.amount.unwrap_or(amount),
            },
            ItemEffect::Lightning { damage, max_range } => ItemEffect::Lightning {
                damage: params.damage.unwrap_or(damage),
                max_range: params.max_range.unwrap_or(max_range),
            },
            ItemEffect::Fireball { damage, radius } => ItemEffect::Fireball {
                damage: params.damage.unwrap_or(damage),
                radius: params.radius.unwrap_or(radius),
            },
            ItemEffect::Confuse { turns } => ItemEffect::Confuse {
                turns: params.turns.unwrap_or(turns),
            },
        }
    }

    /// Run the effect for `caster` using item `item`
    pub fn apply(
        &self,
        caster: &mut Entity,
        item: EntityId,
        target: Option<Position>,
        ctx: &mut EffectContext<'_>,
    ) -> Vec<UseOutcome> {
        match *self {
            ItemEffect::Heal { amount } => heal(caster, item, amount),
            ItemEffect::Lightning { damage, max_range } => {
                cast_lightning(caster, item, damage, max_range, ctx)
            }
            ItemEffect::Fireball { damage, radius } => match target {
                Some(target) => cast_fireball(caster, item, target, damage, radius, ctx),
                None => vec![out_of_view()],
            },
            ItemEffect::Confuse { turns } => match target {
                Some(target) => cast_confuse(item, target, turns, ctx),
                None => vec![out_of_view()],
            },
        }
    }
}

fn say(text: impl Into<String>, color: colors::Rgb) -> UseOutcome {
    UseOutcome::Message(Message::new(text, color))
}

fn out_of_view() -> UseOutcome {
    say("You cannot target a tile outside your field of view.", colors::YELLOW)
}

/// Damage `victim`, reporting a death if this blow killed it
fn hurt(victim: &mut Entity, damage: i32, results: &mut Vec<UseOutcome>) {
    if let Some(fighter) = victim.fighter.as_mut() {
        if fighter.take_damage(damage) {
            results.push(UseOutcome::Dead {
                entity: victim.id,
                xp: fighter.xp,
            });
        }
    }
}

fn heal(caster: &mut Entity, item: EntityId, amount: i32) -> Vec<UseOutcome> {
    let max_hp = caster.max_hp();
    let Some(fighter) = caster.fighter.as_mut() else {
        return vec![say("You are already at full health", colors::YELLOW)];
    };

    if fighter.hp >= max_hp {
        return vec![say("You are already at full health", colors::YELLOW)];
    }

    fighter.heal(amount, max_hp);
    vec![
        UseOutcome::Consumed { item },
        say("Your wounds start to feel better!", colors::GREEN),
    ]
}

fn cast_lightning(
    caster: &mut Entity,
    item: EntityId,
    damage: i32,
    max_range: i32,
    ctx: &mut EffectContext<'_>,
) -> Vec<UseOutcome> {
    let reach = f64::from(max_range) + 1.0;
    let fov = ctx.fov;

    let target = ctx
        .others
        .iter_mut()
        .filter(|e| e.fighter.is_some_and(|f| !f.is_dead()))
        .filter(|e| fov.is_visible(e.pos))
        .map(|e| (caster.distance_to(e), e))
        .filter(|(distance, _)| *distance < reach)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, e)| e);

    let Some(target) = target else {
        return vec![say("No enemy is close enough to strike.", colors::RED)];
    };

    let mut results = vec![
        UseOutcome::Consumed { item },
        say(
            format!(
                "A lightning bolt strikes the {} with a loud thunder! The damage is {}",
                target.name, damage
            ),
            colors::WHITE,
        ),
    ];
    hurt(target, damage, &mut results);
    results
}

fn cast_fireball(
    caster: &mut Entity,
    item: EntityId,
    target: Position,
    damage: i32,
    radius: i32,
    ctx: &mut EffectContext<'_>,
) -> Vec<UseOutcome> {
    if !ctx.fov.is_visible(target) {
        return vec![out_of_view()];
    }

    let mut results = vec![
        UseOutcome::Consumed { item },
        say(
            format!("The fireball explodes, burning everything within {radius} tiles!"),
            colors::ORANGE,
        ),
    ];

    let radius = f64::from(radius);
    let victims = std::iter::once(caster).chain(ctx.others.iter_mut());
    for victim in victims {
        if victim.fighter.is_none() || victim.pos.euclidean_distance(&target) > radius {
            continue;
        }
        results.push(say(
            format!("The {} gets burned for {} hit points.", victim.name, damage),
            colors::ORANGE,
        ));
        hurt(victim, damage, &mut results);
    }

    results
}

fn cast_confuse(
    item: EntityId,
    target: Position,
    turns: u32,
    ctx: &mut EffectContext<'_>,
) -> Vec<UseOutcome> {
    if !ctx.fov.is_visible(target) {
        return vec![out_of_view()];
    }

    let victim = ctx
        .others
        .iter_mut()
        .find(|e| e.at(target) && e.ai.is_some());

    let Some(victim) = victim else {
        return vec![say(
            "There is no targetable enemy at that location.",
            colors::YELLOW,
        )];
    };

    if let Some(previous) = victim.ai.take() {
        victim.ai = Some(Ai::Confused {
            previous: Box::new(previous),
            turns_left: turns,
        });
    }

    vec![
        UseOutcome::Consumed { item },
        say(
            format!(
                "The eyes of the {} look vacant, as it starts to stumble around!",
                victim.name
            ),
            colors::LIGHT_GREEN,
        ),
    ]
}
