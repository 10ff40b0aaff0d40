//! The encounter loop: owns the authoritative combat state, resolves one
//! player action and one opponent volley per round, and classifies the
//! terminal outcome.

use crate::combatant::{spawn_groups, Opponent};
use crate::dice::{attempt_flee, resolve_attack, DieSource, SeededDice};
use crate::error::EncounterError;
use crate::settlement::settle;
use crate::types::{
    CombatResult, EncounterConfig, EncounterOutcome, EncounterRequest, PlayerCombatant,
    TargetStrategy,
};

const POTION_HEAL: i64 = 15;

/// Transient state owned by the loop for one encounter.
struct CombatState {
    round: u64,
    player_hp: i64,
    opponents: Vec<Opponent>,
    log: Vec<String>,
}

impl CombatState {
    fn push(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    fn all_defeated(&self) -> bool {
        self.opponents.iter().all(|o| !o.is_alive())
    }
}

/// Classify a landed hit by the fraction of the target's max hp it removed.
fn wound_severity(damage: i64, max_hp: i64) -> &'static str {
    let pct = damage as f64 / max_hp as f64 * 100.0;
    if pct <= 10.0 {
        "Glancing Blow"
    } else if pct <= 25.0 {
        "Moderate Wound"
    } else if pct <= 50.0 {
        "Severe Injury"
    } else if pct <= 75.0 {
        "Critical Trauma"
    } else {
        "Lethal Blow"
    }
}

/// Pick the player's target among living opponents per the requested
/// strategy. Returns an index into the flattened opponent list, or None
/// when nothing is left standing.
fn select_target<D: DieSource + ?Sized>(
    opponents: &[Opponent],
    strategy: TargetStrategy,
    dice: &mut D,
) -> Option<usize> {
    let living: Vec<usize> = opponents
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_alive())
        .map(|(index, _)| index)
        .collect();
    if living.is_empty() {
        return None;
    }
    let chosen = match strategy {
        TargetStrategy::FirstLiving => living[0],
        TargetStrategy::Random => living[dice.pick_index(living.len())],
        TargetStrategy::LowestHp => living
            .iter()
            .copied()
            .min_by_key(|&index| (opponents[index].current_hp, index))?,
    };
    Some(chosen)
}

/// Resolve a full encounter with a dice stream derived from `seed`. This
/// is the host-facing entry point; identical inputs and seed yield a
/// byte-identical log.
pub fn simulate_encounter(
    request: &EncounterRequest,
    config: &EncounterConfig,
    seed: u64,
) -> Result<CombatResult, EncounterError> {
    let mut dice = SeededDice::new(seed);
    run_encounter(request, config, &mut dice)
}

/// Resolve a full encounter against an injected dice source.
///
/// The caller's request is read-only; the returned player record is a
/// fresh copy with hp, potions, experience and currency updated.
pub fn run_encounter<D: DieSource + ?Sized>(
    request: &EncounterRequest,
    config: &EncounterConfig,
    dice: &mut D,
) -> Result<CombatResult, EncounterError> {
    if request.player.level < 1 {
        return Err(EncounterError::PlayerLevelOutOfRange(request.player.level));
    }
    if request.player.max_hp < 1 {
        return Err(EncounterError::NonPositiveMaxHp(request.player.max_hp));
    }
    let opponents = spawn_groups(&request.enemies)?;

    let mut player = request.player.clone();
    let mut state = CombatState {
        round: 1,
        player_hp: player.hp.max(0),
        opponents,
        log: Vec::new(),
    };

    let outcome = if request.player.hp <= 0 {
        // Degenerate start: nothing to resolve, settle as a loss.
        state.push("Combatant is already down");
        EncounterOutcome::Defeat
    } else if state.opponents.is_empty() {
        // Degenerate start: empty combat.
        state.push("No opponents to fight");
        EncounterOutcome::Victory
    } else {
        run_rounds(&mut state, &mut player, request.target_strategy, config, dice)
    };

    let settlement = settle(
        outcome,
        &player,
        &request.enemies,
        config.penalty_policy,
        dice,
    );
    state.push(settlement.banner.clone());

    let updated = PlayerCombatant {
        hp: state.player_hp,
        experience: player.experience + settlement.xp_delta,
        currency: player.currency + settlement.gold_delta,
        ..player
    };
    Ok(CombatResult {
        log: state.log.join("\n"),
        player: updated,
        outcome,
        victory: outcome == EncounterOutcome::Victory,
        fled: outcome == EncounterOutcome::Retreat,
    })
}

/// Drive rounds until a terminal condition. At most one of potion-use,
/// flee-attempt or attack happens per round; the enemy phase runs every
/// round except one ending in a successful flee.
fn run_rounds<D: DieSource + ?Sized>(
    state: &mut CombatState,
    player: &mut PlayerCombatant,
    strategy: TargetStrategy,
    config: &EncounterConfig,
    dice: &mut D,
) -> EncounterOutcome {
    loop {
        if state.round > config.max_rounds {
            break EncounterOutcome::Stalemate;
        }
        state.push(format!("--- ROUND {} ---", state.round));

        // Player phase: triage below one fifth of max hp, otherwise attack.
        let low_health = state.player_hp * 5 <= player.max_hp;
        if low_health && player.potions > 0 {
            player.potions -= 1;
            state.player_hp = player.max_hp.min(state.player_hp + POTION_HEAL);
            state.push(format!(
                "Potion used! +{POTION_HEAL} HP ({} left)",
                player.potions
            ));
        } else if low_health {
            state.push("Flee attempt...");
            if attempt_flee(dice, player.luck) {
                state.push("Escaped successfully!");
                break EncounterOutcome::Retreat;
            }
            state.push("Escape failed!");
        } else if let Some(target_index) = select_target(&state.opponents, strategy, dice) {
            let target = &state.opponents[target_index];
            let (target_defense, target_max_hp, target_group) =
                (target.defense, target.max_hp, target.group_id);
            let roll = resolve_attack(dice, player.attack, target_defense, player.luck);
            if roll.is_miss {
                state.push(format!("Attack missed Group {target_group}!"));
            } else {
                let defeated = state.opponents[target_index].take_damage(roll.damage);
                let severity = wound_severity(roll.damage, target_max_hp);
                state.push(format!(
                    "Hit Group {target_group}: {} dmg ({severity})",
                    roll.damage
                ));
                if roll.is_crit {
                    state.push("CRITICAL!");
                }
                if defeated {
                    state.push(format!("Group {target_group} defeated"));
                }
            }
        } else {
            break EncounterOutcome::Victory;
        }

        // Enemy phase: every living opponent attacks once; damage is summed
        // into one round total.
        let attackers: Vec<(i64, i64, usize)> = state
            .opponents
            .iter()
            .filter(|o| o.is_alive())
            .map(|o| (o.attack, o.luck, o.group_id))
            .collect();
        let mut round_damage = 0i64;
        for (attack, luck, group_id) in attackers {
            let roll = resolve_attack(dice, attack, player.defense, luck);
            round_damage += roll.damage;
            state.push(format!("Group {group_id} attacks: {} dmg", roll.damage));
        }
        state.player_hp = (state.player_hp - round_damage).max(0);
        if round_damage > 0 {
            state.push(format!("Total damage taken: {round_damage}"));
        }

        if state.all_defeated() {
            break EncounterOutcome::Victory;
        }
        if state.player_hp <= 0 {
            break EncounterOutcome::Defeat;
        }
        state.round += 1;
    }
}
