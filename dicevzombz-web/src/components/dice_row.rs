use dicevzombz_game::DieFace;
use dicevzombz_game::constants::NUM_DICE;
use yew::prelude::*;

use crate::narration::{face_caption, face_icon};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub dice: [Option<DieFace>; NUM_DICE],
    pub selected: [bool; NUM_DICE],
    /// Whether the round is waiting on a reroll choice, making dice
    /// clickable.
    pub selectable: bool,
    pub on_toggle: Callback<usize>,
}

#[function_component(DiceRow)]
pub fn dice_row(props: &Props) -> Html {
    html! {
        <div class="dice-row" role="group" aria-label="Dice">
            { for (0..NUM_DICE).map(|index| render_die(props, index)) }
        </div>
    }
}

fn render_die(props: &Props, index: usize) -> Html {
    let face = props.dice[index];
    let is_selected = props.selected[index];
    let class = classes!(
        "die",
        props.selectable.then_some("selectable"),
        is_selected.then_some("selected-for-reroll"),
    );
    let label = face.map_or_else(
        || "Unrolled die".to_string(),
        |face| format!("Die {}: {}", index + 1, face_caption(face)),
    );
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let selectable = props.selectable;
        Callback::from(move |_| {
            if selectable {
                on_toggle.emit(index);
            }
        })
    };

    html! {
        <button
            type="button"
            {class}
            {onclick}
            disabled={!props.selectable}
            aria-pressed={is_selected.to_string()}
            aria-label={label}
        >
            { face.map_or("\u{1F3B2}", face_icon) }
        </button>
    }
}
