//! Multi-group scenarios: targeting strategies and settlement sums.

use vr_combat_sim::encounter::run_encounter;
use vr_combat_sim::{
    Archetype, EncounterConfig, EncounterOutcome, EncounterRequest, EnemyGroupSpec,
    PlayerCombatant, ScriptedDice, TargetStrategy,
};

fn strong_player() -> PlayerCombatant {
    PlayerCombatant {
        level: 10,
        hp: 500,
        max_hp: 500,
        attack: 100,
        defense: 100,
        luck: 0,
        potions: 0,
        experience: 0,
        currency: 0,
    }
}

fn request(enemies: Vec<EnemyGroupSpec>, strategy: TargetStrategy) -> EncounterRequest {
    EncounterRequest {
        player: strong_player(),
        enemies,
        target_strategy: strategy,
        seed: None,
    }
}

#[test]
fn test_multi_group_victory_sums_rewards_per_group() {
    // Two trash at level 2 and one boss at level 4. The player one-shots
    // the trash and two-shots the boss while taking nothing back.
    let request = request(
        vec![
            EnemyGroupSpec {
                count: 2,
                level: 2,
                archetype: Archetype::Trash,
            },
            EnemyGroupSpec {
                count: 1,
                level: 4,
                archetype: Archetype::Boss,
            },
        ],
        TargetStrategy::FirstLiving,
    );
    let mut dice = ScriptedDice::from_rolls(vec![5]).with_gold_bonuses(vec![5.0]);

    let result =
        run_encounter(&request, &EncounterConfig::default(), &mut dice).expect("valid encounter");

    assert_eq!(result.outcome, EncounterOutcome::Victory);
    // xp: floor(25 * 2 * 0.6 * 2) + floor(25 * 4 * 5.0 * 1)
    assert_eq!(result.player.experience, 60 + 500);
    // gold: floor((5 + 5) * 2 * 2) + floor((5 + 5) * 4 * 1)
    assert_eq!(result.player.currency, 40 + 40);
    assert_eq!(result.player.hp, 500);
    assert!(result.log.contains("Group 2 defeated"));
}

#[test]
fn test_first_living_strategy_walks_the_flattened_list() {
    let request = request(
        vec![
            EnemyGroupSpec {
                count: 1,
                level: 1,
                archetype: Archetype::Normal,
            },
            EnemyGroupSpec {
                count: 1,
                level: 3,
                archetype: Archetype::Normal,
            },
        ],
        TargetStrategy::FirstLiving,
    );
    let mut dice = ScriptedDice::from_rolls(vec![5]);

    let result =
        run_encounter(&request, &EncounterConfig::default(), &mut dice).expect("valid encounter");
    let first_hit = result
        .log
        .lines()
        .find(|l| l.starts_with("Hit Group"))
        .expect("at least one hit");
    assert!(first_hit.starts_with("Hit Group 1:"));
}

#[test]
fn test_lowest_hp_strategy_prefers_the_weakest_target() {
    // Group 1 is a level-3 Normal (30 hp), group 2 a level-1 Normal
    // (20 hp): the weaker group 2 member dies first.
    let request = request(
        vec![
            EnemyGroupSpec {
                count: 1,
                level: 3,
                archetype: Archetype::Normal,
            },
            EnemyGroupSpec {
                count: 1,
                level: 1,
                archetype: Archetype::Normal,
            },
        ],
        TargetStrategy::LowestHp,
    );
    let mut dice = ScriptedDice::from_rolls(vec![5]);

    let result =
        run_encounter(&request, &EncounterConfig::default(), &mut dice).expect("valid encounter");
    let first_hit = result
        .log
        .lines()
        .find(|l| l.starts_with("Hit Group"))
        .expect("at least one hit");
    assert!(first_hit.starts_with("Hit Group 2:"));
    assert_eq!(result.outcome, EncounterOutcome::Victory);
}

#[test]
fn test_lowest_hp_strategy_breaks_ties_in_creation_order() {
    let request = request(
        vec![EnemyGroupSpec {
            count: 2,
            level: 2,
            archetype: Archetype::Normal,
        }],
        TargetStrategy::LowestHp,
    );
    let mut dice = ScriptedDice::from_rolls(vec![5]);

    let result =
        run_encounter(&request, &EncounterConfig::default(), &mut dice).expect("valid encounter");
    // Both members start at the same hp; the first spawned one dies first,
    // so the first defeat line appears before the second member is touched.
    let defeat_count = result.log.matches("Group 1 defeated").count();
    assert_eq!(defeat_count, 2);
    assert_eq!(result.outcome, EncounterOutcome::Victory);
}

#[test]
fn test_random_strategy_draws_targets_from_the_dice() {
    let request = request(
        vec![
            EnemyGroupSpec {
                count: 1,
                level: 1,
                archetype: Archetype::Normal,
            },
            EnemyGroupSpec {
                count: 1,
                level: 1,
                archetype: Archetype::Normal,
            },
        ],
        TargetStrategy::Random,
    );
    // Scripted pick index 1 sends the first attack at group 2.
    let mut dice = ScriptedDice::from_rolls(vec![5]).with_picks(vec![1]);

    let result =
        run_encounter(&request, &EncounterConfig::default(), &mut dice).expect("valid encounter");
    let first_hit = result
        .log
        .lines()
        .find(|l| l.starts_with("Hit Group"))
        .expect("at least one hit");
    assert!(first_hit.starts_with("Hit Group 2:"));
}
