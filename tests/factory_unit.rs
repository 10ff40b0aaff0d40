//! Unit tests for the opponent factory: stat formulas per archetype,
//! group flattening and the fail-fast range validation.

use vr_combat_sim::combatant::{create_opponent, spawn_groups};
use vr_combat_sim::{Archetype, EncounterError, EnemyGroupSpec};

fn group(count: u32, level: i64, archetype: Archetype) -> EnemyGroupSpec {
    EnemyGroupSpec {
        count,
        level,
        archetype,
    }
}

#[test]
fn test_normal_opponent_uses_the_unscaled_base_stats() {
    let opponent = create_opponent(3, Archetype::Normal);
    assert_eq!(opponent.max_hp, 30); // 15 + 5 * 3
    assert_eq!(opponent.current_hp, 30);
    assert_eq!(opponent.attack, 7); // floor(3 + 1.5 * 3)
    assert_eq!(opponent.defense, 5); // 2 + 3
    assert_eq!(opponent.luck, 2); // max(1, 3 - 1)
}

#[test]
fn test_trash_multipliers_floor_each_stat() {
    let opponent = create_opponent(1, Archetype::Trash);
    assert_eq!(opponent.max_hp, 16); // floor(20 * 0.8)
    assert_eq!(opponent.attack, 4); // floor(4.5 * 0.9)
    assert_eq!(opponent.defense, 2); // floor(3 * 0.7)
    assert_eq!(opponent.luck, 1); // max(1, 0) * 1.0
}

#[test]
fn test_elite_multipliers_floor_each_stat() {
    let opponent = create_opponent(10, Archetype::Elite);
    assert_eq!(opponent.max_hp, 117); // floor(65 * 1.8)
    assert_eq!(opponent.attack, 25); // floor(18 * 1.4)
    assert_eq!(opponent.defense, 15); // floor(12 * 1.3)
    assert_eq!(opponent.luck, 13); // floor(9 * 1.5)
}

#[test]
fn test_boss_multipliers_floor_each_stat() {
    let opponent = create_opponent(4, Archetype::Boss);
    assert_eq!(opponent.max_hp, 105); // 35 * 3.0
    assert_eq!(opponent.attack, 18); // 9 * 2.0
    assert_eq!(opponent.defense, 12); // 6 * 2.0
    assert_eq!(opponent.luck, 6); // 3 * 2.0
}

#[test]
fn test_spawn_flattens_groups_in_request_order() {
    let opponents = spawn_groups(&[
        group(2, 1, Archetype::Trash),
        group(3, 2, Archetype::Normal),
    ])
    .expect("valid groups");

    assert_eq!(opponents.len(), 5);
    assert_eq!(
        opponents.iter().map(|o| o.group_id).collect::<Vec<_>>(),
        vec![1, 1, 2, 2, 2]
    );
    assert!(opponents[..2].iter().all(|o| o.archetype == Archetype::Trash));
    assert!(opponents[2..].iter().all(|o| o.archetype == Archetype::Normal));
}

#[test]
fn test_spawn_rejects_out_of_range_count_with_group_attribution() {
    let result = spawn_groups(&[group(1, 1, Archetype::Normal), group(6, 1, Archetype::Normal)]);
    assert_eq!(
        result,
        Err(EncounterError::GroupCountOutOfRange { group: 2, count: 6 })
    );

    let result = spawn_groups(&[group(0, 1, Archetype::Normal)]);
    assert_eq!(
        result,
        Err(EncounterError::GroupCountOutOfRange { group: 1, count: 0 })
    );
}

#[test]
fn test_spawn_rejects_out_of_range_level_with_group_attribution() {
    let result = spawn_groups(&[group(1, 51, Archetype::Boss)]);
    assert_eq!(
        result,
        Err(EncounterError::GroupLevelOutOfRange { group: 1, level: 51 })
    );

    let result = spawn_groups(&[group(1, 0, Archetype::Trash)]);
    assert_eq!(
        result,
        Err(EncounterError::GroupLevelOutOfRange { group: 1, level: 0 })
    );
}

#[test]
fn test_group_members_share_no_state() {
    let mut opponents = spawn_groups(&[group(2, 3, Archetype::Normal)]).expect("valid group");
    opponents[0].take_damage(10);
    assert_eq!(opponents[0].current_hp, 20);
    assert_eq!(opponents[1].current_hp, 30);
}

#[test]
fn test_take_damage_floors_at_zero_and_reports_defeat() {
    let mut opponent = create_opponent(1, Archetype::Trash);
    assert!(!opponent.take_damage(10));
    assert!(opponent.is_alive());
    assert!(opponent.take_damage(100));
    assert_eq!(opponent.current_hp, 0);
    assert!(!opponent.is_alive());
}
