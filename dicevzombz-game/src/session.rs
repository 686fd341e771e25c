//! High-level session wrapper binding a game state, a deterministic RNG,
//! and the cross-session record store.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::ScoreStorage;
use crate::controller::{self, RollOutcome};
use crate::score::SessionRecord;
use crate::state::GameState;

/// One player's seat at the table. Owns the authoritative `GameState`,
/// sequences the four player actions, and folds finished games into the
/// persistent `SessionRecord`.
///
/// Actions are serialized by a busy flag: the presentation layer raises it
/// while a roll animation is in flight so a second roll request cannot
/// interleave with an unresolved round. Every action is otherwise
/// synchronous and runs to completion.
#[derive(Debug, Clone)]
pub struct GameSession<S: ScoreStorage> {
    state: GameState,
    record: SessionRecord,
    rng: ChaCha20Rng,
    storage: S,
    busy: bool,
}

impl<S: ScoreStorage> GameSession<S> {
    /// Start a session with a deterministic seed, reading the stored bests.
    /// A missing or unreadable store falls back to empty records; play
    /// continues in memory.
    pub fn new(storage: S, seed: u64) -> Self {
        let record = storage.load().unwrap_or_default();
        Self {
            state: GameState::new(),
            record,
            rng: ChaCha20Rng::seed_from_u64(seed),
            storage,
            busy: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn record(&self) -> &SessionRecord {
        &self.record
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Raise or clear the presentation-side busy latch. While raised, all
    /// player actions are dropped.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Roll the round's initial dice.
    pub fn request_initial_roll(&mut self) -> RollOutcome {
        if self.busy {
            return RollOutcome::Ignored;
        }
        let outcome = controller::request_initial_roll(&mut self.state, &mut self.rng);
        self.commit_if_finished(&outcome);
        outcome
    }

    /// Toggle one die's reroll selection.
    pub fn toggle_die_selection(&mut self, index: usize) {
        if self.busy {
            return;
        }
        controller::toggle_die_selection(&mut self.state, index);
    }

    /// Commit the reroll selection and resolve the round.
    pub fn confirm_reroll(&mut self) -> RollOutcome {
        if self.busy {
            return RollOutcome::Ignored;
        }
        let outcome = controller::confirm_reroll(&mut self.state, &mut self.rng);
        self.commit_if_finished(&outcome);
        outcome
    }

    /// Discard the current game and start over at round 1. Bests survive;
    /// an in-flight busy latch does not.
    pub fn new_game(&mut self) {
        self.state = GameState::new();
        self.busy = false;
    }

    fn commit_if_finished(&mut self, outcome: &RollOutcome) {
        let RollOutcome::Resolved(report) = outcome else {
            return;
        };
        if !report.outcome.is_terminal() {
            return;
        }
        let changed = self
            .record
            .record_game_end(self.state.total_round(), report.outcome.is_won());
        if changed {
            // Storage failures are non-fatal; the in-memory record stays
            // authoritative for the rest of the session.
            let _ = self.storage.save(&self.record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundPhase;
    use crate::score::MemoryScoreStorage;
    use crate::state::Outcome;

    fn drive_to_completion(session: &mut GameSession<MemoryScoreStorage>) -> Outcome {
        for _ in 0..64 {
            match session.request_initial_roll() {
                RollOutcome::AwaitingReroll => match session.confirm_reroll() {
                    RollOutcome::Resolved(report) if report.outcome.is_terminal() => {
                        return report.outcome;
                    }
                    _ => {}
                },
                RollOutcome::Resolved(report) if report.outcome.is_terminal() => {
                    return report.outcome;
                }
                _ => {}
            }
        }
        panic!("game did not terminate");
    }

    #[test]
    fn session_loads_stored_bests_at_startup() {
        let storage = MemoryScoreStorage::with_record(SessionRecord {
            highest_round: 6,
            earliest_win: 3,
        });
        let session = GameSession::new(storage, 1);
        assert_eq!(session.record().highest_round, 6);
        assert_eq!(session.record().earliest_win, 3);
    }

    #[test]
    fn busy_sessions_drop_every_action() {
        let mut session = GameSession::new(MemoryScoreStorage::default(), 2);
        session.set_busy(true);
        assert_eq!(session.request_initial_roll(), RollOutcome::Ignored);
        session.toggle_die_selection(0);
        assert_eq!(session.confirm_reroll(), RollOutcome::Ignored);
        assert_eq!(
            session.state().round_state.phase,
            RoundPhase::AwaitingInitialRoll
        );

        session.set_busy(false);
        assert_eq!(session.request_initial_roll(), RollOutcome::AwaitingReroll);
    }

    #[test]
    fn finished_games_persist_the_record() {
        let storage = MemoryScoreStorage::default();
        let mut session = GameSession::new(storage.clone(), 3);
        let outcome = drive_to_completion(&mut session);
        assert!(outcome.is_terminal());

        let saved = storage.snapshot();
        assert!(saved.highest_round >= 1);
        assert_eq!(saved, *session.record());
    }

    #[test]
    fn new_game_resets_state_but_keeps_bests() {
        let mut session = GameSession::new(MemoryScoreStorage::default(), 4);
        drive_to_completion(&mut session);
        let record = *session.record();
        assert!(record.highest_round >= 1);

        session.new_game();
        assert_eq!(session.state().round, 1);
        assert_eq!(session.state().outcome, Outcome::InProgress);
        assert_eq!(*session.record(), record);
    }

    #[test]
    fn records_only_improve_across_repeated_games() {
        let mut session = GameSession::new(MemoryScoreStorage::default(), 5);
        let mut highest = 0;
        let mut earliest = 0;
        for _ in 0..8 {
            drive_to_completion(&mut session);
            let record = session.record();
            assert!(record.highest_round >= highest);
            if earliest > 0 {
                assert!(record.earliest_win == 0 || record.earliest_win <= earliest);
            }
            highest = record.highest_round;
            earliest = record.earliest_win;
            session.new_game();
        }
    }
}
