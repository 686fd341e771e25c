//! Effect resolution for a rolled set of dice, plus the horde attack that
//! closes every round.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BARRICADE_STRENGTH, NUM_DICE, OVERWHELMED_BONUS_DAMAGE, OVERWHELMED_THRESHOLD};
use crate::dice::DieFace;
use crate::state::GameState;

/// Structured log entry for one step of a round's resolution. Narration text
/// is a presentation concern; the engine only reports what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundEvent {
    Rolled { face: DieFace },
    RerollSkipped,
    ZombiesAttracted { count: u32 },
    ZombiesDefeated { count: u32 },
    BarricadeRepaired { repaired: u32, boosted: u32 },
    HordeAttacked { damage: u32, overwhelmed: bool },
    QuietRound,
}

/// Per-kind tallies and net deltas from one effect resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EffectSummary {
    pub zombie_adds: u32,
    pub attacks: u32,
    pub super_attacks: u32,
    pub defends: u32,
    pub boosts: u32,
    /// Zombies added to the horde this step.
    pub zombies_added: u32,
    /// Zombies actually removed, after capping by the available horde.
    pub zombies_defeated: u32,
    /// Barricade strength actually restored, after the repair ceiling.
    pub barricade_repaired: u32,
}

/// Result of the automatic horde attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HordeAttack {
    pub damage: u32,
    pub overwhelmed: bool,
}

/// Apply the effects of a full dice set to the game state.
///
/// New zombies join the horde before defeats are computed, so this turn's
/// reinforcements can be cut down by this turn's attacks, and defeats are
/// capped by the post-addition horde size. Repairs never push the barricade
/// past `MAX_BARRICADE_STRENGTH`. A no-op on finished games.
pub fn resolve_effects(dice: &[DieFace; NUM_DICE], state: &mut GameState) -> EffectSummary {
    if state.is_over() {
        return EffectSummary::default();
    }

    let mut summary = EffectSummary::default();
    for face in dice {
        match face {
            DieFace::ZombieAdd => summary.zombie_adds += 1,
            DieFace::Attack => summary.attacks += 1,
            DieFace::SuperAttack => summary.super_attacks += 1,
            DieFace::Defend => summary.defends += 1,
            DieFace::BarricadeBoost => summary.boosts += 1,
        }
    }

    summary.zombies_added = summary.zombie_adds;
    state.zombies += summary.zombies_added;

    let defeat_capacity = summary.attacks + summary.super_attacks * 2;
    summary.zombies_defeated = defeat_capacity.min(state.zombies);
    state.zombies -= summary.zombies_defeated;

    let repair = summary.defends + summary.boosts * 3;
    summary.barricade_repaired =
        (state.barricade + repair).min(MAX_BARRICADE_STRENGTH) - state.barricade;
    state.barricade += summary.barricade_repaired;

    summary
}

/// Run the horde attack that ends every round: damage equals the zombie
/// count, plus a bonus when the horde is overwhelming. The barricade floors
/// at zero; loss detection is the controller's job. A no-op on finished
/// games or when no zombies remain.
pub fn apply_horde_attack(state: &mut GameState) -> HordeAttack {
    if state.is_over() || state.zombies == 0 {
        return HordeAttack::default();
    }

    let overwhelmed = state.zombies > OVERWHELMED_THRESHOLD;
    let damage = if overwhelmed {
        state.zombies + OVERWHELMED_BONUS_DAMAGE
    } else {
        state.zombies
    };
    state.barricade = state.barricade.saturating_sub(damage);

    HordeAttack { damage, overwhelmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(zombies: u32, barricade: u32) -> GameState {
        GameState {
            zombies,
            barricade,
            ..GameState::new()
        }
    }

    #[test]
    fn attacks_and_defends_tally_and_apply() {
        let mut state = state_with(10, 20);
        let summary = resolve_effects(
            &[DieFace::Attack, DieFace::Attack, DieFace::Defend],
            &mut state,
        );
        assert_eq!(summary.attacks, 2);
        assert_eq!(summary.defends, 1);
        assert_eq!(summary.zombies_defeated, 2);
        assert_eq!(summary.barricade_repaired, 1);
        assert_eq!(state.zombies, 8);
        assert_eq!(state.barricade, 21);
    }

    #[test]
    fn defeats_are_capped_by_the_post_addition_horde() {
        // One zombie arrives, then the super attack can only cut down what
        // is actually standing there.
        let mut state = state_with(0, 20);
        let summary = resolve_effects(
            &[DieFace::ZombieAdd, DieFace::SuperAttack, DieFace::SuperAttack],
            &mut state,
        );
        assert_eq!(summary.zombies_added, 1);
        assert_eq!(summary.zombies_defeated, 1);
        assert_eq!(state.zombies, 0);
    }

    #[test]
    fn repairs_never_exceed_the_barricade_ceiling() {
        let mut state = state_with(5, 29);
        let summary = resolve_effects(
            &[
                DieFace::BarricadeBoost,
                DieFace::BarricadeBoost,
                DieFace::Defend,
            ],
            &mut state,
        );
        assert_eq!(summary.boosts, 2);
        assert_eq!(summary.barricade_repaired, 1);
        assert_eq!(state.barricade, MAX_BARRICADE_STRENGTH);
    }

    #[test]
    fn horde_attack_subtracts_zombie_count() {
        let mut state = state_with(8, 13);
        let attack = apply_horde_attack(&mut state);
        assert_eq!(attack, HordeAttack { damage: 8, overwhelmed: false });
        assert_eq!(state.barricade, 5);
    }

    #[test]
    fn horde_attack_adds_bonus_when_overwhelmed() {
        let mut state = state_with(OVERWHELMED_THRESHOLD + 2, 30);
        let attack = apply_horde_attack(&mut state);
        assert!(attack.overwhelmed);
        assert_eq!(attack.damage, OVERWHELMED_THRESHOLD + 2 + OVERWHELMED_BONUS_DAMAGE);
        assert_eq!(state.barricade, 30 - attack.damage);
    }

    #[test]
    fn horde_attack_floors_the_barricade_at_zero() {
        let mut state = state_with(6, 5);
        let attack = apply_horde_attack(&mut state);
        assert_eq!(attack.damage, 6);
        assert_eq!(state.barricade, 0);
    }

    #[test]
    fn empty_horde_deals_no_damage() {
        let mut state = state_with(0, 12);
        let attack = apply_horde_attack(&mut state);
        assert_eq!(attack, HordeAttack::default());
        assert_eq!(state.barricade, 12);
    }

    #[test]
    fn finished_games_are_left_untouched() {
        use crate::state::{LossReason, Outcome};

        let mut state = state_with(4, 0);
        state.outcome = Outcome::Lost(LossReason::BarricadeBreached);
        let frozen = state.clone();

        let summary = resolve_effects(
            &[DieFace::ZombieAdd, DieFace::ZombieAdd, DieFace::ZombieAdd],
            &mut state,
        );
        let attack = apply_horde_attack(&mut state);

        assert_eq!(summary, EffectSummary::default());
        assert_eq!(attack, HordeAttack::default());
        assert_eq!(state, frozen);
    }
}
