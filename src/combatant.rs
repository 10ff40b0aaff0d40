//! Opponent instantiation from archetype parameters.

use crate::archetype::Archetype;
use crate::error::EncounterError;
use crate::types::EnemyGroupSpec;

pub const MAX_GROUP_COUNT: u32 = 5;
pub const MAX_GROUP_LEVEL: i64 = 50;

/// A single computer-controlled combatant. Mutated only by damage
/// application; never resurrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    pub level: i64,
    pub archetype: Archetype,
    pub current_hp: i64,
    pub max_hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub luck: i64,
    /// 1-based position of the owning group in the request list.
    pub group_id: usize,
}

impl Opponent {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Apply damage, flooring hp at zero. Returns true if this blow
    /// defeated the opponent.
    pub fn take_damage(&mut self, damage: i64) -> bool {
        self.current_hp = (self.current_hp - damage).max(0);
        self.current_hp == 0
    }
}

/// Build one opponent from level-scaled base stats and the archetype's
/// multiplier row, flooring each product. Every call returns a fresh
/// value; instances never share state.
pub fn create_opponent(level: i64, archetype: Archetype) -> Opponent {
    let modifiers = archetype.modifiers();
    let base_hp = 15.0 + 5.0 * level as f64;
    let base_attack = 3.0 + 1.5 * level as f64;
    let base_defense = 2.0 + level as f64;
    let base_luck = 1.max(level - 1) as f64;
    let max_hp = (base_hp * modifiers.hp).floor() as i64;
    Opponent {
        level,
        archetype,
        current_hp: max_hp,
        max_hp,
        attack: (base_attack * modifiers.attack).floor() as i64,
        defense: (base_defense * modifiers.defense).floor() as i64,
        luck: (base_luck * modifiers.luck).floor() as i64,
        group_id: 0,
    }
}

/// Materialize all requested groups into a flattened opponent list, first
/// group first, members in creation order.
///
/// Fails fast on out-of-range group sizes or levels; nothing is spawned
/// on error.
pub fn spawn_groups(groups: &[EnemyGroupSpec]) -> Result<Vec<Opponent>, EncounterError> {
    let mut opponents = Vec::new();
    for (index, spec) in groups.iter().enumerate() {
        let group_id = index + 1;
        if spec.count < 1 || spec.count > MAX_GROUP_COUNT {
            return Err(EncounterError::GroupCountOutOfRange {
                group: group_id,
                count: spec.count,
            });
        }
        if spec.level < 1 || spec.level > MAX_GROUP_LEVEL {
            return Err(EncounterError::GroupLevelOutOfRange {
                group: group_id,
                level: spec.level,
            });
        }
        for _ in 0..spec.count {
            let mut opponent = create_opponent(spec.level, spec.archetype);
            opponent.group_id = group_id;
            opponents.push(opponent);
        }
    }
    Ok(opponents)
}
