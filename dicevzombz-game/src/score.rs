//! Cross-session best records and the in-memory storage fallback.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use crate::ScoreStorage;

/// Bests that outlive any single game: the highest stage-adjusted round ever
/// reached, and the earliest round at which a win occurred (0 = no win yet).
/// Both fields move monotonically, so a worse run never erases a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionRecord {
    pub highest_round: u32,
    pub earliest_win: u32,
}

impl SessionRecord {
    /// Fold one finished game into the record. Returns whether anything
    /// changed, so callers know when a write-back is warranted.
    pub fn record_game_end(&mut self, total_round: u32, won: bool) -> bool {
        let mut changed = false;
        if total_round > self.highest_round {
            self.highest_round = total_round;
            changed = true;
        }
        if won && (self.earliest_win == 0 || total_round < self.earliest_win) {
            self.earliest_win = total_round;
            changed = true;
        }
        changed
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.earliest_win > 0
    }
}

/// In-memory record storage. Serves as the test double and as the fallback
/// when a platform has no persistent store available.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStorage {
    record: Rc<RefCell<SessionRecord>>,
}

impl MemoryScoreStorage {
    #[must_use]
    pub fn with_record(record: SessionRecord) -> Self {
        Self {
            record: Rc::new(RefCell::new(record)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionRecord {
        *self.record.borrow()
    }
}

impl ScoreStorage for MemoryScoreStorage {
    type Error = Infallible;

    fn load(&self) -> Result<SessionRecord, Self::Error> {
        Ok(*self.record.borrow())
    }

    fn save(&self, record: &SessionRecord) -> Result<(), Self::Error> {
        *self.record.borrow_mut() = *record;
        Ok(())
    }
}
