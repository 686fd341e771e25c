use dicevzombz_game::SessionRecord;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub record: SessionRecord,
    pub on_play_again: Callback<()>,
}

#[function_component(OutcomeModal)]
pub fn outcome_modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_play_again = {
        let cb = props.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let earliest = if props.record.has_won() {
        format!("round {}", props.record.earliest_win)
    } else {
        "none yet".to_string()
    };

    html! {
        <div class="modal-backdrop" role="presentation">
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <div class="modal__header">
                    <h2 id="modal-title">{ props.title.clone() }</h2>
                </div>
                <p class="modal__description">{ props.message.clone() }</p>
                <div class="modal__body">
                    <p class="best-stats">
                        { format!("Highest round reached: {}", props.record.highest_round) }
                    </p>
                    <p class="best-stats">{ format!("Earliest win: {earliest}") }</p>
                    <button type="button" class="play-again" onclick={on_play_again}>
                        { "Play Again" }
                    </button>
                </div>
            </div>
        </div>
    }
}
