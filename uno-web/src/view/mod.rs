use yew::{function_component, html, Html};
use yew_router::prelude::*;

use self::{
    end_view::EndView, game_view::GameView, home_view::HomeView, lobby_view::LobbyView,
};

mod common;
mod end_view;
mod game_view;
mod home_view;
mod lobby_view;

#[derive(Clone, PartialEq, Eq, Debug, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/lobby/:game_id")]
    Lobby { game_id: String },
    #[at("/game/:game_id")]
    Game { game_id: String },
    #[at("/end/:game_id")]
    End { game_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: &Route) -> Html {
    match route {
        Route::Home => html! { <HomeView/> },
        Route::Lobby { game_id } => html! { <LobbyView game_id={game_id.clone()}/> },
        Route::Game { game_id } => html! { <GameView game_id={game_id.clone()}/> },
        Route::End { game_id } => html! { <EndView game_id={game_id.clone()}/> },
        // Unknown paths all land back on the home page.
        Route::NotFound => html! { <Redirect<Route> to={Route::Home}/> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <main>
                <Switch<Route> render={Switch::render(switch)}/>
            </main>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn known_paths_recognize_with_their_id() {
        check!(Route::recognize("/") == Some(Route::Home));
        check!(
            Route::recognize("/lobby/GAME1234")
                == Some(Route::Lobby {
                    game_id: "GAME1234".into()
                })
        );
        check!(
            Route::recognize("/game/GAME1234")
                == Some(Route::Game {
                    game_id: "GAME1234".into()
                })
        );
        check!(
            Route::recognize("/end/GAME1234")
                == Some(Route::End {
                    game_id: "GAME1234".into()
                })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        check!(Route::recognize("/nope") == Some(Route::NotFound));
        check!(Route::recognize("/lobby") == Some(Route::NotFound));
        check!(Route::recognize("/game/a/b") == Some(Route::NotFound));
    }
}
