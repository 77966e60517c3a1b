use yew::{html, Component, Context, Html, Properties};
use yew_router::prelude::*;

use crate::mock::{self, PlayerStatus};

use super::Route;

pub struct LobbyView {
    players: Vec<PlayerStatus>,
}

pub enum LobbyMsg {
    StartGame,
    Leave,
}

#[derive(Properties, PartialEq)]
pub struct LobbyProps {
    pub game_id: String,
}

impl Component for LobbyView {
    type Message = LobbyMsg;
    type Properties = LobbyProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            players: mock::lobby_players(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(history) = ctx.link().history() else {
            return false;
        };
        let game_id = ctx.props().game_id.clone();
        match msg {
            LobbyMsg::StartGame => {
                log::info!("starting game {game_id}");
                history.push(Route::Game { game_id });
            }
            LobbyMsg::Leave => history.push(Route::Home),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_start = ctx.link().callback(|_| LobbyMsg::StartGame);
        let on_leave = ctx.link().callback(|_| LobbyMsg::Leave);

        fn player_to_html(player: &PlayerStatus) -> Html {
            html! {
                <tr>
                    <td>{ player.name.clone() }</td>
                    <td style="text-align: right;">
                        <span class="tag is-success">{"Waiting"}</span>
                    </td>
                </tr>
            }
        }

        let lobby_title = format!("Lobby #{}", ctx.props().game_id);

        html! {
            <section class="section">
                <div class="container">
                    <div class="columns is-centered">
                        <div class="column is-half">
                            <h2 class="title">{lobby_title}</h2>
                            <table class="table is-fullwidth is-hoverable">
                                <thead>
                                    <tr>
                                        <th>{"Players"}</th>
                                        <th style="width: 25%;"></th>
                                    </tr>
                                </thead>
                                <tbody> {
                                    self.players.iter().map(player_to_html).collect::<Html>()
                                } </tbody>
                            </table>
                        </div>
                    </div>
                    <div class="columns is-centered">
                        <div class="column is-half">
                            <button class="button is-medium is-fullwidth is-success" onclick={on_start}>
                                {"Start game"}
                            </button>
                        </div>
                    </div>
                    <div class="columns is-centered">
                        <div class="column is-half">
                            <button class="button is-medium is-fullwidth is-warning" onclick={on_leave}>
                                {"Leave lobby"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}
