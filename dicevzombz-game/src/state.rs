//! Session-scoped game state and terminal outcome tags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{INITIAL_BARRICADE_STRENGTH, INITIAL_ZOMBIES, MAX_ROUNDS};
use crate::round::RoundState;

/// How a won game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// Every zombie was defeated before the rounds ran out.
    HordeEliminated,
    /// The barricade was still standing after the final round.
    SurvivedAllRounds,
}

/// How a lost game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    BarricadeBreached,
}

/// Terminal state of the session. Once `Won` or `Lost` is reached the value
/// is latched and the rest of the game state freezes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    InProgress,
    Won(WinReason),
    Lost(LossReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in_progress",
            Self::Won(WinReason::HordeEliminated) => "won.horde_eliminated",
            Self::Won(WinReason::SurvivedAllRounds) => "won.survived_all_rounds",
            Self::Lost(LossReason::BarricadeBreached) => "lost.barricade_breached",
        };
        f.write_str(text)
    }
}

/// Aggregate state for one game: the horde, the barricade, round and stage
/// counters, the latched outcome, and the current round's dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Zombies at the barricade. Never negative, unbounded above.
    pub zombies: u32,
    /// Barricade strength, clamped to `[0, MAX_BARRICADE_STRENGTH]`.
    pub barricade: u32,
    /// Current round, 1-based. May step to `MAX_ROUNDS + 1` while the
    /// survival check latches the outcome.
    pub round: u32,
    /// Current stage, 1-based. Participates only in total-round accounting.
    pub stage: u32,
    pub outcome: Outcome,
    pub round_state: RoundState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game at stage 1, round 1, with starting zombies and barricade.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zombies: INITIAL_ZOMBIES,
            barricade: INITIAL_BARRICADE_STRENGTH,
            round: 1,
            stage: 1,
            outcome: Outcome::InProgress,
            round_state: RoundState::fresh(),
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Stage-adjusted round number used for session records. The round
    /// counter is capped at `MAX_ROUNDS` so a survival win that stepped the
    /// counter past the final round still records the final round.
    #[must_use]
    pub fn total_round(&self) -> u32 {
        (self.stage - 1) * MAX_ROUNDS + self.round.min(MAX_ROUNDS)
    }
}
