//! Boundary types exchanged with the host.
//!
//! The host submits an [`EncounterRequest`] and displays the returned
//! [`CombatResult`]; everything in between is owned by the engine. All types
//! here derive `JsonSchema` so the host-visible schema is machine-derived.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use crate::archetype::Archetype;

/// The caller-owned player record.
///
/// Received by value and returned updated inside [`CombatResult`]; the
/// engine never mutates the caller's copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PlayerCombatant {
    pub level: i64,
    pub hp: i64,
    pub max_hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub luck: i64,
    #[serde(default)]
    pub potions: i64,
    #[serde(default)]
    pub experience: i64,
    #[serde(default)]
    pub currency: i64,
}

/// One requested group of same-level, same-archetype opponents.
///
/// The group id used in log attribution is the 1-based position of the
/// spec in the request list and is stable for the whole encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct EnemyGroupSpec {
    pub count: u32,
    pub level: i64,
    #[serde(rename = "type")]
    pub archetype: Archetype,
}

/// How the player picks a target each attack phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum TargetStrategy {
    /// First opponent with hp left, in flattened creation order.
    #[default]
    FirstLiving,
    /// Uniform draw among living opponents, taken from the dice source.
    Random,
    /// Living opponent with the least hp; creation order breaks ties.
    LowestHp,
}

/// Full encounter request as submitted by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct EncounterRequest {
    pub player: PlayerCombatant,
    pub enemies: Vec<EnemyGroupSpec>,
    #[serde(default)]
    pub target_strategy: TargetStrategy,
    /// Seed for the dice stream. Absent means the server draws one, which
    /// makes the encounter non-replayable.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Terminal classification of an encounter. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum EncounterOutcome {
    Victory,
    Defeat,
    Retreat,
    /// Round cap reached with both sides still standing.
    Stalemate,
}

/// Terminal output handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CombatResult {
    /// Newline-joined event lines, in emission order.
    pub log: String,
    /// The input player record with hp, potions, experience and currency
    /// updated by the encounter.
    pub player: PlayerCombatant,
    pub outcome: EncounterOutcome,
    pub victory: bool,
    pub fled: bool,
}

/// Penalty applied to experience and currency on defeat or retreat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum PenaltyPolicy {
    /// 10 % loss on defeat, 5 % on retreat.
    #[default]
    Standard,
    /// No loss; the result only reports final hp and potions.
    Waived,
}

/// Engine-side knobs resolved at the settlement boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterConfig {
    pub penalty_policy: PenaltyPolicy,
    /// Upper bound on the round loop; reaching it ends the encounter in
    /// [`EncounterOutcome::Stalemate`].
    pub max_rounds: u64,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        EncounterConfig {
            penalty_policy: PenaltyPolicy::default(),
            max_rounds: 100,
        }
    }
}
