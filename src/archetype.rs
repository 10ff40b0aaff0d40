use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

/// One of four opponent power tiers. Every tier carries a fixed row of
/// stat multipliers applied to level-scaled base stats, plus the
/// experience multiplier used by victory settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum Archetype {
    Trash,
    Normal,
    Elite,
    Boss,
}

/// Multipliers applied to the level-scaled base stats of an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct StatModifiers {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub luck: f64,
}

impl Archetype {
    /// All known tiers, in ascending power order.
    pub fn all() -> Vec<Archetype> {
        vec![
            Archetype::Trash,
            Archetype::Normal,
            Archetype::Elite,
            Archetype::Boss,
        ]
    }

    /// Stat multiplier row for this tier. The table is immutable for the
    /// lifetime of the process.
    pub const fn modifiers(self) -> StatModifiers {
        match self {
            Archetype::Trash => StatModifiers {
                hp: 0.8,
                attack: 0.9,
                defense: 0.7,
                luck: 1.0,
            },
            Archetype::Normal => StatModifiers {
                hp: 1.0,
                attack: 1.0,
                defense: 1.0,
                luck: 1.0,
            },
            Archetype::Elite => StatModifiers {
                hp: 1.8,
                attack: 1.4,
                defense: 1.3,
                luck: 1.5,
            },
            Archetype::Boss => StatModifiers {
                hp: 3.0,
                attack: 2.0,
                defense: 2.0,
                luck: 2.0,
            },
        }
    }

    /// Experience multiplier applied per defeated group member.
    pub const fn xp_multiplier(self) -> f64 {
        match self {
            Archetype::Trash => 0.6,
            Archetype::Normal => 1.0,
            Archetype::Elite => 1.8,
            Archetype::Boss => 5.0,
        }
    }
}
