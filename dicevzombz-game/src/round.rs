//! Per-round dice state and the round phase machine.

use serde::{Deserialize, Serialize};

use crate::constants::{NUM_DICE, REROLLS_PER_ROUND};
use crate::dice::DieFace;

/// Where the current round sits in its roll → reroll → resolve lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    AwaitingInitialRoll,
    AwaitingRerollChoice,
    Resolved,
}

/// Mutable state for a single round: the dice slots, the player's reroll
/// selection, and the remaining reroll budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub dice: [Option<DieFace>; NUM_DICE],
    pub selected: [bool; NUM_DICE],
    pub rerolls_available: u8,
    pub phase: RoundPhase,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::fresh()
    }
}

impl RoundState {
    /// Empty round state awaiting its initial roll, with a full reroll budget.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            dice: [None; NUM_DICE],
            selected: [false; NUM_DICE],
            rerolls_available: REROLLS_PER_ROUND,
            phase: RoundPhase::AwaitingInitialRoll,
        }
    }

    /// All dice faces, once every slot has been populated by a roll.
    #[must_use]
    pub fn rolled_dice(&self) -> Option<[DieFace; NUM_DICE]> {
        let mut faces = [DieFace::Attack; NUM_DICE];
        for (slot, face) in self.dice.iter().zip(faces.iter_mut()) {
            *face = (*slot)?;
        }
        Some(faces)
    }

    /// Flip the reroll selection for one die. Out-of-range indices and
    /// toggles outside the reroll-choice phase are no-ops.
    pub fn toggle_selection(&mut self, index: usize) {
        if self.phase != RoundPhase::AwaitingRerollChoice {
            return;
        }
        if let Some(flag) = self.selected.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = [false; NUM_DICE];
    }
}
