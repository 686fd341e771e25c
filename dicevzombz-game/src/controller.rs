//! Round sequencing: the phase machine over a round's lifecycle, the
//! effect/horde pipeline, and the win/loss rules.
//!
//! Everything here is synchronous. A committed roll always resolves to
//! completion in one call; animation delays live entirely in the
//! presentation layer and observe the returned report after the fact.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ROUNDS;
use crate::dice::{apply_reroll, roll_initial};
use crate::resolve::{EffectSummary, HordeAttack, RoundEvent, apply_horde_attack, resolve_effects};
use crate::round::{RoundPhase, RoundState};
use crate::state::{GameState, LossReason, Outcome, WinReason};

/// Everything that happened while a round resolved, in order, for the
/// presentation layer to narrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoundReport {
    pub events: Vec<RoundEvent>,
    pub summary: EffectSummary,
    pub horde: HordeAttack,
    pub outcome: Outcome,
}

/// Result of a roll request against the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// The request arrived out of phase or after game end and was dropped.
    Ignored,
    /// Dice are on the table and the player may pick dice to re-roll.
    AwaitingReroll,
    /// The round ran to completion.
    Resolved(RoundReport),
}

/// Roll the initial dice for the round. If a reroll is still available the
/// round pauses for the player's selection; otherwise it resolves
/// immediately.
pub fn request_initial_roll(state: &mut GameState, rng: &mut impl Rng) -> RollOutcome {
    if state.is_over() || state.round_state.phase != RoundPhase::AwaitingInitialRoll {
        return RollOutcome::Ignored;
    }

    let dice = roll_initial(rng);
    for (slot, face) in state.round_state.dice.iter_mut().zip(dice) {
        *slot = Some(face);
    }

    if state.round_state.rerolls_available > 0 {
        state.round_state.phase = RoundPhase::AwaitingRerollChoice;
        return RollOutcome::AwaitingReroll;
    }
    RollOutcome::Resolved(resolve_round(state, Vec::new()))
}

/// Flip the reroll selection on one die. Outside the reroll-choice phase, or
/// after game end, this is a no-op.
pub fn toggle_die_selection(state: &mut GameState, index: usize) {
    if state.is_over() {
        return;
    }
    state.round_state.toggle_selection(index);
}

/// Commit the player's reroll selection. The selected dice get fresh values
/// computed into a new array and committed atomically; an empty selection
/// still consumes the reroll. The round then resolves.
pub fn confirm_reroll(state: &mut GameState, rng: &mut impl Rng) -> RollOutcome {
    if state.is_over()
        || state.round_state.phase != RoundPhase::AwaitingRerollChoice
        || state.round_state.rerolls_available == 0
    {
        return RollOutcome::Ignored;
    }
    let Some(current) = state.round_state.rolled_dice() else {
        return RollOutcome::Ignored;
    };

    let selected = state.round_state.selected;
    let mut lead_events = Vec::new();
    if selected.iter().any(|&s| s) {
        let rerolled = apply_reroll(&current, &selected, rng);
        for (slot, face) in state.round_state.dice.iter_mut().zip(rerolled) {
            *slot = Some(face);
        }
    } else {
        lead_events.push(RoundEvent::RerollSkipped);
    }

    state.round_state.rerolls_available = 0;
    state.round_state.clear_selection();
    RollOutcome::Resolved(resolve_round(state, lead_events))
}

/// Evaluate the win/loss rules once, in priority order, and latch the
/// result. Calls on an already-finished game are no-ops.
pub fn check_win_loss(state: &mut GameState) -> Outcome {
    if state.outcome.is_terminal() {
        return state.outcome;
    }
    state.outcome = if state.barricade == 0 {
        Outcome::Lost(LossReason::BarricadeBreached)
    } else if state.zombies == 0 && state.round <= MAX_ROUNDS {
        Outcome::Won(WinReason::HordeEliminated)
    } else if state.round > MAX_ROUNDS {
        Outcome::Won(WinReason::SurvivedAllRounds)
    } else {
        Outcome::InProgress
    };
    state.outcome
}

/// Run the locked-in dice through effect resolution, the horde attack, and
/// the win/loss check, then advance to the next round when the game goes on.
fn resolve_round(state: &mut GameState, lead_events: Vec<RoundEvent>) -> RoundReport {
    state.round_state.phase = RoundPhase::Resolved;
    let Some(dice) = state.round_state.rolled_dice() else {
        return RoundReport::default();
    };

    let mut events = lead_events;
    for face in dice {
        events.push(RoundEvent::Rolled { face });
    }

    let summary = resolve_effects(&dice, state);
    if summary.zombies_added > 0 {
        events.push(RoundEvent::ZombiesAttracted {
            count: summary.zombies_added,
        });
    }
    if summary.zombies_defeated > 0 {
        events.push(RoundEvent::ZombiesDefeated {
            count: summary.zombies_defeated,
        });
    }
    // Reported whenever repair dice landed, even when the ceiling absorbed
    // the whole amount; the narration shows the raw dice values.
    if summary.defends + summary.boosts > 0 {
        events.push(RoundEvent::BarricadeRepaired {
            repaired: summary.defends,
            boosted: summary.boosts * 3,
        });
    }

    let horde = apply_horde_attack(state);
    if horde.damage > 0 {
        events.push(RoundEvent::HordeAttacked {
            damage: horde.damage,
            overwhelmed: horde.overwhelmed,
        });
    } else {
        events.push(RoundEvent::QuietRound);
    }

    let mut outcome = check_win_loss(state);
    if outcome == Outcome::InProgress {
        state.round += 1;
        state.round_state = RoundState::fresh();
        // Stepping past the final round with the barricade intact is the
        // survival win; re-check so it latches within the same action.
        outcome = check_win_loss(state);
    }

    RoundReport {
        events,
        summary,
        horde,
        outcome,
    }
}
