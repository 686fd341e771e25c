//! Root application component: owns the game session behind a reducer and
//! wires player actions to the engine.

use std::rc::Rc;

use dicevzombz_game::{GameSession, RollOutcome, RoundPhase};
use yew::prelude::*;

use crate::components::{DiceRow, OutcomeModal, StatusBar};
use crate::narration;
use crate::storage::BrowserScoreStorage;

/// Cap on individual zombie sprites before collapsing into a "+N" overflow.
const MAX_ZOMBIES_SHOWN: u32 = 20;

pub enum AppAction {
    /// The single roll button: initial roll or reroll-confirm depending on
    /// the round phase.
    Roll,
    ToggleDie(usize),
    PlayAgain,
}

#[derive(Clone)]
pub struct AppState {
    session: GameSession<BrowserScoreStorage>,
    lines: Vec<String>,
}

impl AppState {
    fn fresh() -> Self {
        Self {
            session: GameSession::new(BrowserScoreStorage, seed_from_clock()),
            lines: vec![narration::OPENING.to_string()],
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::Roll => {
                let outcome = match next.session.state().round_state.phase {
                    RoundPhase::AwaitingInitialRoll => next.session.request_initial_roll(),
                    RoundPhase::AwaitingRerollChoice => next.session.confirm_reroll(),
                    RoundPhase::Resolved => RollOutcome::Ignored,
                };
                match outcome {
                    RollOutcome::AwaitingReroll => {
                        next.lines = vec![narration::REROLL_PROMPT.to_string()];
                    }
                    RollOutcome::Resolved(report) => {
                        next.lines = narration::describe_report(&report);
                    }
                    RollOutcome::Ignored => return self,
                }
            }
            AppAction::ToggleDie(index) => next.session.toggle_die_selection(index),
            AppAction::PlayAgain => {
                next.session.new_game();
                next.lines = vec![narration::OPENING.to_string()];
            }
        }
        Rc::new(next)
    }
}

fn seed_from_clock() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(0))
    }
}

fn zombie_art(zombies: u32) -> Html {
    let shown = zombies.min(MAX_ZOMBIES_SHOWN);
    let overflow = zombies.saturating_sub(MAX_ZOMBIES_SHOWN);
    html! {
        <div class="zombie-art" aria-label={format!("{zombies} zombies at the barricade")}>
            { for (0..shown).map(|_| html! { <span>{ "\u{1F9DF}" }</span> }) }
            { (overflow > 0).then(|| html! { <span class="overflow">{ format!(" +{overflow}") }</span> }) }
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::fresh);

    let game = state.session.state();
    let record = *state.session.record();
    let phase = game.round_state.phase;
    let game_over = game.is_over();

    let on_roll = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(AppAction::Roll))
    };
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(AppAction::ToggleDie(index)))
    };
    let on_play_again = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(AppAction::PlayAgain))
    };

    let roll_label = match phase {
        RoundPhase::AwaitingRerollChoice => "Re-roll Selected",
        _ => "Roll Dice!",
    };

    html! {
        <main class="game-shell">
            <h1>{ "Dice vs Zombz" }</h1>
            <StatusBar
                round={game.round}
                stage={game.stage}
                zombies={game.zombies}
                barricade={game.barricade}
                rerolls={game.round_state.rerolls_available}
            />
            { zombie_art(game.zombies) }
            <DiceRow
                dice={game.round_state.dice}
                selected={game.round_state.selected}
                selectable={phase == RoundPhase::AwaitingRerollChoice && !game_over}
                on_toggle={on_toggle}
            />
            <button
                type="button"
                class="roll-button"
                onclick={on_roll}
                disabled={game_over}
            >
                { roll_label }
            </button>
            <div class="message-area" role="log" aria-live="polite">
                { for state.lines.iter().map(|line| html! { <p>{ line }</p> }) }
            </div>
            <OutcomeModal
                open={game_over}
                title={narration::outcome_title(game.outcome)}
                message={narration::outcome_message(game.outcome, game.stage)}
                record={record}
                on_play_again={on_play_again}
            />
        </main>
    }
}
