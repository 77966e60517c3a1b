use uno_core::Direction;
use yew::{function_component, html, Properties};

#[derive(Properties, PartialEq)]
pub struct GameInfoProps {
    pub current_player: String,
    pub direction: Direction,
}

/// The banner over the table: whose turn it is and which way play goes.
#[function_component(GameInfo)]
pub fn game_info(props: &GameInfoProps) -> Html {
    html! {
        <div class="field is-grouped">
            <div class="tags has-addons" style="margin-right: 12px;">
                <span class="tag is-dark">{"turn"}</span>
                <span class="tag is-info">{ props.current_player.clone() }</span>
            </div>
            <div class="tags has-addons">
                <span class="tag is-dark">{"direction"}</span>
                <span class="tag is-light">{ props.direction.to_string() }</span>
            </div>
        </div>
    }
}
