use uno_core::Direction;
use yew::{classes, function_component, html, Callback, Html, Properties};

use crate::mock::{self, PlayerStatus};

use super::common::{
    card_view::CardView, game_info::GameInfo, hand_view::HandView, players_view::PlayersView,
};

#[derive(Properties, PartialEq)]
pub struct GameViewProps {
    pub game_id: String,
}

/// The fixed visual positions around the table. Two mock opponents fill the
/// first two seats.
const SEAT_POSITIONS: [&str; 2] = ["top", "left"];

fn seat_to_html(position: &str, player: &PlayerStatus, is_current: bool) -> Html {
    let uno_suffix = if player.said_uno { " (UNO)" } else { "" };
    html! {
        <div class={classes!("seat", position.to_string(), is_current.then_some("active"))}>
            <div>
                <div class="name"><b>{ format!("{}{}", player.name, uno_suffix) }</b></div>
                <div class="count">{ super::common::players_view::card_count_label(player.card_count) }</div>
            </div>
        </div>
    }
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let players = mock::players();
    let hand = mock::my_hand();
    let top_card = mock::top_card();
    let current_player_id = mock::current_player_id();

    let on_draw = Callback::from(|_| log::info!("draw"));
    let on_uno = Callback::from(|_| log::info!("uno"));

    let seats = SEAT_POSITIONS
        .into_iter()
        .zip(players.iter())
        .map(|(position, player)| {
            seat_to_html(position, player, player.id == current_player_id)
        })
        .collect::<Html>();

    html! {
        <div class="game-root">
            <div style="padding: 12px 16px; display: flex; justify-content: space-between;">
                <h2 class="title is-4" style="margin: 0;">
                    { format!("UNO Game #{}", props.game_id) }
                </h2>
                <GameInfo current_player={mock::current_player_name().to_string()}
                    direction={Direction::Clockwise}/>
            </div>

            <div class="table-container">
                <div class="table">
                    <PlayersView players={players}/>
                    { seats }

                    <div class="columns is-mobile is-centered" style="margin-top: 16px;">
                        <div class="column is-narrow" style="text-align: center;">
                            <div style="font-size: 12px; margin-bottom: 6px;">{"Draw pile"}</div>
                            <CardView face_down={true}/>
                        </div>
                        <div class="column is-narrow" style="text-align: center;">
                            <div style="font-size: 12px; margin-bottom: 6px;">{"Discard"}</div>
                            <CardView card={Some(top_card)}/>
                        </div>
                    </div>
                </div>
            </div>

            <div class="bottom-zone">
                <HandView cards={hand}/>

                <div style="display: flex; justify-content: center; gap: 12px; margin-top: 10px;">
                    <button class="button is-primary" onclick={on_draw}>{"Draw"}</button>
                    <button class="button is-danger" onclick={on_uno}>{"UNO"}</button>
                </div>
            </div>
        </div>
    }
}
