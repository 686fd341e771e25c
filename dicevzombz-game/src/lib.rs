//! Dice vs Zombz Game Engine
//!
//! Platform-agnostic core logic for the Dice vs Zombz dice survival game.
//! This crate provides the round resolution engine and game controller
//! without UI or platform-specific dependencies.

pub mod constants;
pub mod controller;
pub mod dice;
pub mod resolve;
pub mod round;
pub mod score;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use controller::{
    RollOutcome, RoundReport, check_win_loss, confirm_reroll, request_initial_roll,
    toggle_die_selection,
};
pub use dice::{DieFace, apply_reroll, roll_die, roll_initial};
pub use resolve::{EffectSummary, HordeAttack, RoundEvent, apply_horde_attack, resolve_effects};
pub use round::{RoundPhase, RoundState};
pub use score::{MemoryScoreStorage, SessionRecord};
pub use session::GameSession;
pub use state::{GameState, LossReason, Outcome, WinReason};

/// Trait for abstracting session-record persistence.
/// Platform-specific implementations should provide this.
pub trait ScoreStorage {
    type Error: std::error::Error;

    /// Load the stored bests. Absent or unreadable values should surface as
    /// an error or an all-zero record; callers treat both as "no bests yet".
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read.
    fn load(&self) -> Result<SessionRecord, Self::Error>;

    /// Write the bests back. Called synchronously whenever the record
    /// changes at game end.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, record: &SessionRecord) -> Result<(), Self::Error>;
}
