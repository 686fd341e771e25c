pub mod dice_row;
pub mod outcome_modal;
pub mod status_bar;

pub use dice_row::DiceRow;
pub use outcome_modal::OutcomeModal;
pub use status_bar::StatusBar;
