//! Post-loop computation of the experience/currency delta.

use crate::dice::DieSource;
use crate::types::{EncounterOutcome, EnemyGroupSpec, PenaltyPolicy, PlayerCombatant};

const DEFEAT_PENALTY_RATE: f64 = 0.10;
const RETREAT_PENALTY_RATE: f64 = 0.05;

/// Experience/currency delta plus the terminal log banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub xp_delta: i64,
    pub gold_delta: i64,
    pub banner: String,
}

/// Settle an encounter that ended in `outcome`.
///
/// Victory sums per-group rewards: `floor(25 · level · xp_mult · size)`
/// experience and `floor((5 + U(0,10)) · level · size)` gold, one fresh
/// uniform draw per group. Defeat and retreat apply the configured penalty
/// policy. Stalemate settles nothing.
pub fn settle<D: DieSource + ?Sized>(
    outcome: EncounterOutcome,
    player: &PlayerCombatant,
    groups: &[EnemyGroupSpec],
    policy: PenaltyPolicy,
    dice: &mut D,
) -> Settlement {
    match outcome {
        EncounterOutcome::Victory => {
            let mut xp_gain = 0i64;
            let mut gold_gain = 0i64;
            for group in groups {
                let size = f64::from(group.count);
                let level = group.level as f64;
                xp_gain += (25.0 * level * group.archetype.xp_multiplier() * size).floor() as i64;
                gold_gain += ((5.0 + dice.gold_bonus()) * level * size).floor() as i64;
            }
            Settlement {
                xp_delta: xp_gain,
                gold_delta: gold_gain,
                banner: format!("VICTORY! Earned {xp_gain} XP and {gold_gain} silver"),
            }
        }
        EncounterOutcome::Defeat => scaled_loss(player, policy, DEFEAT_PENALTY_RATE, "DEFEAT!"),
        EncounterOutcome::Retreat => scaled_loss(player, policy, RETREAT_PENALTY_RATE, "RETREAT!"),
        EncounterOutcome::Stalemate => Settlement {
            xp_delta: 0,
            gold_delta: 0,
            banner: "STALEMATE! Neither side could prevail".to_string(),
        },
    }
}

fn scaled_loss(
    player: &PlayerCombatant,
    policy: PenaltyPolicy,
    rate: f64,
    label: &str,
) -> Settlement {
    match policy {
        PenaltyPolicy::Standard => {
            let xp_loss = (player.experience as f64 * rate).floor() as i64;
            let gold_loss = (player.currency as f64 * rate).floor() as i64;
            Settlement {
                xp_delta: -xp_loss,
                gold_delta: -gold_loss,
                banner: format!("{label} Lost {xp_loss} XP and {gold_loss} silver"),
            }
        }
        PenaltyPolicy::Waived => Settlement {
            xp_delta: 0,
            gold_delta: 0,
            banner: label.to_string(),
        },
    }
}
