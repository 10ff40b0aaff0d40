use thiserror::Error;

use crate::combatant::{MAX_GROUP_COUNT, MAX_GROUP_LEVEL};

/// Configuration errors surfaced before any round is resolved.
///
/// All randomness-driven outcomes (miss, crit, failed flee) are normal
/// control flow, never errors. An error is local to one encounter call and
/// leaves no state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    #[error("group {group}: count {count} out of range 1..={max}", max = MAX_GROUP_COUNT)]
    GroupCountOutOfRange { group: usize, count: u32 },

    #[error("group {group}: level {level} out of range 1..={max}", max = MAX_GROUP_LEVEL)]
    GroupLevelOutOfRange { group: usize, level: i64 },

    #[error("player level {0} must be at least 1")]
    PlayerLevelOutOfRange(i64),

    #[error("player max hp {0} must be positive")]
    NonPositiveMaxHp(i64),
}
