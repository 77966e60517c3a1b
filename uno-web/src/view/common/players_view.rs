use yew::{function_component, html, Html, Properties};

use crate::mock::PlayerStatus;

#[derive(Properties, PartialEq)]
pub struct PlayersViewProps {
    pub players: Vec<PlayerStatus>,
}

pub fn card_count_label(count: usize) -> String {
    if count == 1 {
        "1 card".to_string()
    } else {
        format!("{count} cards")
    }
}

/// The roster badge, present only for a player who has called UNO.
fn badge_to_html(said_uno: bool) -> Html {
    if said_uno {
        html! { <span class="tag is-danger is-rounded">{"UNO"}</span> }
    } else {
        html! {}
    }
}

#[function_component(PlayersView)]
pub fn players_view(props: &PlayersViewProps) -> Html {
    fn player_to_html(player: &PlayerStatus) -> Html {
        html! {
            <div class="box" style="min-width: 160px; padding: 10px 12px;">
                <div style="display: flex; align-items: center; justify-content: space-between;">
                    <b>{ player.name.clone() }</b>
                    { badge_to_html(player.said_uno) }
                </div>
                <div>{ card_count_label(player.card_count) }</div>
            </div>
        }
    }
    html! {
        <div style="display: flex; justify-content: center; gap: 14px; flex-wrap: wrap;"> {
            props.players.iter().map(player_to_html).collect::<Html>()
        } </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use yew::virtual_dom::VNode;

    #[test]
    fn card_count_label_handles_plural() {
        check!(card_count_label(1) == "1 card");
        check!(card_count_label(3) == "3 cards");
        check!(card_count_label(0) == "0 cards");
    }

    #[test]
    fn badge_present_for_a_player_who_said_uno() {
        let_assert!(VNode::VTag(tag) = badge_to_html(true));
        check!(tag.tag() == "span");
    }

    #[test]
    fn no_badge_for_a_player_who_did_not() {
        let_assert!(VNode::VList(list) = badge_to_html(false));
        check!(list.is_empty());
    }
}
