//! Full-session sweeps: seeded games driven through the public action
//! surface, checking termination, record monotonicity, and reroll identity.

use dicevzombz_game::{
    DieFace, GameSession, MemoryScoreStorage, Outcome, RollOutcome, RoundPhase, SessionRecord,
    constants::MAX_ROUNDS,
};

fn new_session(seed: u64) -> GameSession<MemoryScoreStorage> {
    GameSession::new(MemoryScoreStorage::default(), seed)
}

/// Play one game to the end, rerolling the first die every round.
fn play_game(session: &mut GameSession<MemoryScoreStorage>) -> Outcome {
    for _ in 0..(MAX_ROUNDS + 2) {
        assert_eq!(session.request_initial_roll(), RollOutcome::AwaitingReroll);
        session.toggle_die_selection(0);
        let RollOutcome::Resolved(report) = session.confirm_reroll() else {
            panic!("confirm should resolve the round");
        };
        if report.outcome.is_terminal() {
            return report.outcome;
        }
    }
    panic!("game exceeded the round limit without terminating");
}

#[test]
fn seeded_games_always_terminate() {
    for seed in 0..50 {
        let mut session = new_session(seed);
        let outcome = play_game(&mut session);
        assert!(outcome.is_terminal(), "seed {seed} did not finish");
        assert!(session.state().total_round() >= 1);
        assert!(session.state().total_round() <= MAX_ROUNDS);
    }
}

#[test]
fn records_are_monotonic_across_many_games() {
    let storage = MemoryScoreStorage::default();
    let mut session = GameSession::new(storage.clone(), 99);
    let mut previous = SessionRecord::default();
    for _ in 0..20 {
        play_game(&mut session);
        let record = *session.record();
        assert!(record.highest_round >= previous.highest_round);
        if previous.earliest_win > 0 {
            assert!(record.earliest_win > 0);
            assert!(record.earliest_win <= previous.earliest_win);
        }
        // The store tracks the in-memory record after every finished game.
        assert_eq!(storage.snapshot(), record);
        previous = record;
        session.new_game();
    }
}

#[test]
fn reroll_only_replaces_selected_dice() {
    for seed in 0..40 {
        let mut session = new_session(seed);
        assert_eq!(session.request_initial_roll(), RollOutcome::AwaitingReroll);
        let before = session
            .state()
            .round_state
            .rolled_dice()
            .expect("initial roll populates every slot");

        // Keep dice 0 and 2, reroll die 1.
        session.toggle_die_selection(1);
        let RollOutcome::Resolved(report) = session.confirm_reroll() else {
            panic!("confirm should resolve the round");
        };

        let resolved: Vec<DieFace> = report
            .events
            .iter()
            .filter_map(|event| match event {
                dicevzombz_game::RoundEvent::Rolled { face } => Some(*face),
                _ => None,
            })
            .collect();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0], before[0]);
        assert_eq!(resolved[2], before[2]);
    }
}

#[test]
fn actions_after_game_end_are_dropped_until_replay() {
    let mut session = new_session(7);
    let final_outcome = play_game(&mut session);
    assert!(final_outcome.is_terminal());
    let frozen = session.state().clone();

    assert_eq!(session.request_initial_roll(), RollOutcome::Ignored);
    assert_eq!(session.confirm_reroll(), RollOutcome::Ignored);
    session.toggle_die_selection(0);
    assert_eq!(*session.state(), frozen);

    session.new_game();
    assert_eq!(session.state().round, 1);
    assert_eq!(session.state().outcome, Outcome::InProgress);
    assert_eq!(
        session.state().round_state.phase,
        RoundPhase::AwaitingInitialRoll
    );
}
