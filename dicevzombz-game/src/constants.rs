//! Centralized balance and tuning constants for Dice vs Zombz game logic.
//!
//! These values define the deterministic math for the round resolution
//! engine. Keeping them together ensures that gameplay can only be adjusted
//! via code changes reviewed in version control.

// Starting conditions -------------------------------------------------------
pub const INITIAL_BARRICADE_STRENGTH: u32 = 20;
pub const INITIAL_ZOMBIES: u32 = 10;

// Barricade tuning ----------------------------------------------------------
/// Ceiling the barricade can be repaired to, regardless of dice luck.
pub const MAX_BARRICADE_STRENGTH: u32 = 30;

// Round structure -----------------------------------------------------------
pub const MAX_ROUNDS: u32 = 10;
pub const NUM_DICE: usize = 3;
pub const REROLLS_PER_ROUND: u8 = 1;

// Stage tuning --------------------------------------------------------------
/// Extra zombies a later stage would open with. Stage progression beyond
/// total-round accounting is not exercised by the current controller.
pub const STAGE_ZOMBIE_INCREMENT: u32 = 5;

// Horde tuning --------------------------------------------------------------
/// Zombie count above which the horde deals bonus damage.
pub const OVERWHELMED_THRESHOLD: u32 = 15;
pub const OVERWHELMED_BONUS_DAMAGE: u32 = 5;
