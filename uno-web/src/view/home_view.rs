use uno_core::game_code;
use web_sys::HtmlInputElement;
use yew::{html, Component, Context, Html, NodeRef};
use yew_router::prelude::*;

use super::Route;

#[derive(Default)]
pub struct HomeView {
    join_code: NodeRef,
}

pub enum HomeMsg {
    CreateGame,
    JoinGame,
}

impl Component for HomeView {
    type Message = HomeMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use HomeMsg::*;
        match msg {
            CreateGame => {
                let code = game_code(&mut rand::thread_rng());
                log::info!("created game {code}");
                self.go_to_lobby(ctx, code);
                false
            }
            JoinGame => {
                let Some(input) = self.join_code.cast::<HtmlInputElement>() else {
                    return false;
                };
                let code = input.value().trim().to_uppercase();
                if code.is_empty() {
                    return false;
                }
                log::info!("joining game {code}");
                self.go_to_lobby(ctx, code);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_create = ctx.link().callback(|_| HomeMsg::CreateGame);
        let on_join = ctx.link().callback(|_| HomeMsg::JoinGame);
        html! {
            <section class="hero is-primary is-fullheight">
                <div class="hero-body">
                    <div class="container">
                        <div class="columns is-centered">
                            <div class="column is-4 is-6-tablet">
                                <h1 class="title">{"UNO"}</h1>
                                <div class="box">
                                    <div class="field">
                                        <div class="control">
                                            <button class="button is-success is-fullwidth" onclick={on_create}>
                                                {"Create game"}
                                            </button>
                                        </div>
                                    </div>
                                    <div class="field">
                                        <label class="label">{"Game code"}</label>
                                        <div class="control">
                                            <input ref={self.join_code.clone()} class="input" type="text"
                                                placeholder="e.g. GAME1234"/>
                                        </div>
                                    </div>
                                    <div class="field is-grouped is-grouped-right">
                                        <div class="control">
                                            <button class="button is-link" onclick={on_join}>{"Join"}</button>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}

impl HomeView {
    fn go_to_lobby(&self, ctx: &Context<Self>, game_id: String) {
        if let Some(history) = ctx.link().history() {
            history.push(Route::Lobby { game_id });
        }
    }
}
