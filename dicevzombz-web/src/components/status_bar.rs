use dicevzombz_game::constants::MAX_ROUNDS;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub round: u32,
    pub stage: u32,
    pub zombies: u32,
    pub barricade: u32,
    pub rerolls: u8,
}

#[function_component(StatusBar)]
pub fn status_bar(p: &Props) -> Html {
    let round_text = format!("Round: {}/{MAX_ROUNDS}", p.round);
    let stage_text = format!("Stage: {}", p.stage);

    html! {
        <section class="panel stats-panel" role="region" aria-label="Game status">
            <div class="stat-chip-grid" role="list">
                { stat_chip(&round_text, "round") }
                { stat_chip(&stage_text, "stage") }
                { stat_chip(&format!("Zombies: {}", p.zombies), "zombies") }
                { stat_chip(&format!("Barricade: {}", p.barricade), "barricade") }
                { stat_chip(&format!("Re-rolls: {}", p.rerolls), "rerolls") }
            </div>
        </section>
    }
}

fn stat_chip(text: &str, kind: &'static str) -> Html {
    html! {
        <div class={classes!("stat-chip", format!("stat-{kind}"))} role="listitem">
            { text }
        </div>
    }
}
