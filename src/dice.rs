//! The single entropy source of the engine: d6 rolls, attack resolution,
//! flee checks and the gold bonus draw all flow through [`DieSource`].
//!
//! Randomness is injected, never ambient. Production code seeds a
//! [`SeededDice`] from a u64; tests feed a [`ScriptedDice`] with fixed
//! sequences to replay an encounter byte for byte.

use rand::{Rng, SeedableRng};
use rand_pcg::Lcg64Xsh32;

/// Injected randomness seam for one encounter.
pub trait DieSource {
    /// Uniform roll in 1..=6.
    fn roll_d6(&mut self) -> u8;

    /// Uniform draw in [0, 10), consumed once per group by gold settlement.
    fn gold_bonus(&mut self) -> f64;

    /// Uniform index in 0..len, used by randomized targeting. `len` must
    /// be greater than zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production dice: a PCG stream seeded from a u64 doubled into 16 bytes.
pub struct SeededDice {
    rng: Lcg64Xsh32,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        let mut seed_bytes = [0u8; 16];
        seed_bytes[0..8].copy_from_slice(&seed.to_le_bytes());
        seed_bytes[8..16].copy_from_slice(&seed.to_le_bytes());
        SeededDice {
            rng: Lcg64Xsh32::from_seed(seed_bytes),
        }
    }
}

impl DieSource for SeededDice {
    fn roll_d6(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    fn gold_bonus(&mut self) -> f64 {
        self.rng.gen_range(0.0..10.0)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replay dice fed from fixed sequences. Every sequence cycles when
/// exhausted, so a short script covers an arbitrarily long encounter.
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next_roll: usize,
    bonuses: Vec<f64>,
    next_bonus: usize,
    picks: Vec<usize>,
    next_pick: usize,
}

impl ScriptedDice {
    /// Script the d6 stream; gold bonuses default to 5.0 and target picks
    /// to index 0.
    pub fn from_rolls(rolls: Vec<u8>) -> Self {
        assert!(!rolls.is_empty(), "roll script must not be empty");
        assert!(
            rolls.iter().all(|r| (1..=6).contains(r)),
            "scripted rolls must be d6 values"
        );
        ScriptedDice {
            rolls,
            next_roll: 0,
            bonuses: vec![5.0],
            next_bonus: 0,
            picks: vec![0],
            next_pick: 0,
        }
    }

    pub fn with_gold_bonuses(mut self, bonuses: Vec<f64>) -> Self {
        assert!(!bonuses.is_empty(), "bonus script must not be empty");
        self.bonuses = bonuses;
        self
    }

    pub fn with_picks(mut self, picks: Vec<usize>) -> Self {
        assert!(!picks.is_empty(), "pick script must not be empty");
        self.picks = picks;
        self
    }
}

impl DieSource for ScriptedDice {
    fn roll_d6(&mut self) -> u8 {
        let roll = self.rolls[self.next_roll % self.rolls.len()];
        self.next_roll += 1;
        roll
    }

    fn gold_bonus(&mut self) -> f64 {
        let bonus = self.bonuses[self.next_bonus % self.bonuses.len()];
        self.next_bonus += 1;
        bonus
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        pick % len
    }
}

/// Result of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub damage: i64,
    pub is_miss: bool,
    pub is_crit: bool,
}

/// Resolve one attack.
///
/// A roll of 1 misses outright. A roll of 6 crits for the absolute
/// attack/defense gap plus 6 plus the attacker's luck, so a critical
/// against a higher-defense target still lands hard. Anything else hits
/// for `max(0, attack - defense + roll)`.
pub fn resolve_attack<D: DieSource + ?Sized>(
    dice: &mut D,
    attack: i64,
    defense: i64,
    luck: i64,
) -> AttackRoll {
    match dice.roll_d6() {
        1 => AttackRoll {
            damage: 0,
            is_miss: true,
            is_crit: false,
        },
        6 => AttackRoll {
            damage: (attack - defense).abs() + 6 + luck,
            is_miss: false,
            is_crit: true,
        },
        roll => AttackRoll {
            damage: (attack - defense + i64::from(roll)).max(0),
            is_miss: false,
            is_crit: false,
        },
    }
}

/// Flee succeeds iff the roll meets `6 - luck`. At luck 0 only a 6
/// escapes; luck 5 and above always escapes.
pub fn attempt_flee<D: DieSource + ?Sized>(dice: &mut D, luck: i64) -> bool {
    i64::from(dice.roll_d6()) >= 6 - luck
}
