//! Dice faces and rolling primitives for the round resolver.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::NUM_DICE;

/// One face of a game die. Each kind carries a fixed effect weight; the
/// weights are exposed through the accessor methods below so the resolver
/// never hard-codes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieFace {
    ZombieAdd,
    BarricadeBoost,
    Attack,
    SuperAttack,
    Defend,
}

/// Face layout of a die, indexed by roll value minus one. Attack occupies
/// two of the six faces and therefore has double weight.
const FACE_LAYOUT: [DieFace; 6] = [
    DieFace::ZombieAdd,
    DieFace::BarricadeBoost,
    DieFace::Attack,
    DieFace::Attack,
    DieFace::Defend,
    DieFace::SuperAttack,
];

impl DieFace {
    /// Map a numeric roll (1..=6) onto its face.
    #[must_use]
    pub const fn from_roll(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ZombieAdd),
            2 => Some(Self::BarricadeBoost),
            3 | 4 => Some(Self::Attack),
            5 => Some(Self::Defend),
            6 => Some(Self::SuperAttack),
            _ => None,
        }
    }

    /// Zombies attracted by this face.
    #[must_use]
    pub const fn zombies_added(self) -> u32 {
        match self {
            Self::ZombieAdd => 1,
            _ => 0,
        }
    }

    /// Zombies this face can defeat.
    #[must_use]
    pub const fn defeat_power(self) -> u32 {
        match self {
            Self::Attack => 1,
            Self::SuperAttack => 2,
            _ => 0,
        }
    }

    /// Barricade strength this face restores.
    #[must_use]
    pub const fn repair_amount(self) -> u32 {
        match self {
            Self::Defend => 1,
            Self::BarricadeBoost => 3,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZombieAdd => "zombie_add",
            Self::BarricadeBoost => "barricade_boost",
            Self::Attack => "attack",
            Self::SuperAttack => "super_attack",
            Self::Defend => "defend",
        }
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roll a single die, uniform over the six faces.
pub fn roll_die(rng: &mut impl Rng) -> DieFace {
    FACE_LAYOUT[rng.gen_range(0..FACE_LAYOUT.len())]
}

/// Roll the full set of dice for a fresh round. No guarantee of distinct
/// values.
pub fn roll_initial(rng: &mut impl Rng) -> [DieFace; NUM_DICE] {
    std::array::from_fn(|_| roll_die(rng))
}

/// Re-roll the dice at selected indices, returning a fresh array. Unselected
/// indices keep their current value bit-for-bit; the input is left untouched
/// so callers can still compare against the pre-reroll faces.
pub fn apply_reroll(
    current: &[DieFace; NUM_DICE],
    selected: &[bool; NUM_DICE],
    rng: &mut impl Rng,
) -> [DieFace; NUM_DICE] {
    std::array::from_fn(|i| {
        if selected[i] {
            roll_die(rng)
        } else {
            current[i]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn roll_values_map_onto_faces() {
        assert_eq!(DieFace::from_roll(1), Some(DieFace::ZombieAdd));
        assert_eq!(DieFace::from_roll(2), Some(DieFace::BarricadeBoost));
        assert_eq!(DieFace::from_roll(3), Some(DieFace::Attack));
        assert_eq!(DieFace::from_roll(4), Some(DieFace::Attack));
        assert_eq!(DieFace::from_roll(5), Some(DieFace::Defend));
        assert_eq!(DieFace::from_roll(6), Some(DieFace::SuperAttack));
        assert_eq!(DieFace::from_roll(0), None);
        assert_eq!(DieFace::from_roll(7), None);
    }

    #[test]
    fn effect_weights_match_face_kinds() {
        assert_eq!(DieFace::ZombieAdd.zombies_added(), 1);
        assert_eq!(DieFace::Attack.defeat_power(), 1);
        assert_eq!(DieFace::SuperAttack.defeat_power(), 2);
        assert_eq!(DieFace::Defend.repair_amount(), 1);
        assert_eq!(DieFace::BarricadeBoost.repair_amount(), 3);
    }

    #[test]
    fn every_face_is_reachable_from_a_seeded_rng() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(roll_die(&mut rng).as_str());
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn reroll_leaves_unselected_dice_untouched() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let current = [DieFace::Attack, DieFace::Defend, DieFace::ZombieAdd];
        let rerolled = apply_reroll(&current, &[false, true, false], &mut rng);
        assert_eq!(rerolled[0], DieFace::Attack);
        assert_eq!(rerolled[2], DieFace::ZombieAdd);
    }

    #[test]
    fn reroll_with_empty_mask_is_identity() {
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        let current = [DieFace::SuperAttack, DieFace::Defend, DieFace::Attack];
        let rerolled = apply_reroll(&current, &[false, false, false], &mut rng);
        assert_eq!(rerolled, current);
    }
}
