use yew::{function_component, html, Html, Properties};
use yew_router::prelude::*;

use crate::mock;

use super::Route;

#[derive(Properties, PartialEq)]
pub struct EndViewProps {
    pub game_id: String,
}

#[function_component(EndView)]
pub fn end_view(props: &EndViewProps) -> Html {
    fn score_to_html((name, points): &(String, u32)) -> Html {
        html! {
            <tr>
                <td>{ name.clone() }</td>
                <td style="text-align: right;">{ *points }</td>
            </tr>
        }
    }

    html! {
        <section class="section">
            <div class="container">
                <div class="columns is-mobile is-centered">
                    <div class="column is-narrow">
                        <h1 class="title">{ format!("{} Wins", mock::winner_name()) }</h1>
                        <p class="subtitle">{ format!("Game #{}", props.game_id) }</p>
                    </div>
                </div>
                <div class="columns is-centered">
                    <div class="column is-half">
                        <table class="table is-fullwidth">
                            <thead>
                                <tr>
                                    <th>{"Player"}</th>
                                    <th style="text-align: right;">{"Points left in hand"}</th>
                                </tr>
                            </thead>
                            <tbody> {
                                mock::final_scores().iter().map(score_to_html).collect::<Html>()
                            } </tbody>
                        </table>
                    </div>
                </div>
                <div class="columns is-centered">
                    <div class="column is-half has-text-centered">
                        <Link<Route> to={Route::Home} classes="button is-primary">
                            {"Back to home"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
