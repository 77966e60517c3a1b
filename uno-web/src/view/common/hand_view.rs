use uno_core::Card;
use yew::{function_component, html, Callback, Html, Properties};

use super::card_view::CardView;

#[derive(Properties, PartialEq)]
pub struct HandViewProps {
    pub cards: Vec<Card>,
}

fn card_to_html(card: &Card) -> Html {
    let card = *card;
    let onclick = Callback::from(move |()| {
        log::info!("play: {:?} {}", card.color(), card.value());
    });
    html! {
        <CardView key={card.id().0.to_string()} card={Some(card)} onclick={Some(onclick)}/>
    }
}

/// One tile per card, in hand order.
fn tiles(cards: &[Card]) -> Html {
    cards.iter().map(card_to_html).collect::<Html>()
}

/// The viewer's row of cards. Clicking a card only logs the play; there is
/// no engine behind it yet.
#[function_component(HandView)]
pub fn hand_view(props: &HandViewProps) -> Html {
    html! {
        <div style="display: flex; justify-content: center; flex-wrap: wrap; gap: 8px;"> {
            tiles(&props.cards)
        } </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use uno_core::{CardId, Color, Value};
    use yew::virtual_dom::{Key, VNode};

    fn card(id: u32, color: Color, value: Value) -> Card {
        Card::new(CardId(id), color, value)
    }

    #[test]
    fn n_cards_render_n_tiles_in_order() {
        let cards = vec![
            card(1, Color::Red, Value::Five),
            card(2, Color::Blue, Value::DrawTwo),
            card(3, Color::Green, Value::Seven),
            card(4, Color::Black, Value::Wild),
        ];
        let_assert!(VNode::VList(list) = tiles(&cards));
        check!(list.len() == cards.len());
        let keys: Vec<_> = list
            .iter()
            .map(|node| {
                let_assert!(VNode::VComp(_comp) = node);
                node.key()
            })
            .collect();
        check!(
            keys == [
                Some(Key::from("1")),
                Some(Key::from("2")),
                Some(Key::from("3")),
                Some(Key::from("4")),
            ]
        );
    }

    #[test]
    fn empty_hand_renders_no_tiles() {
        let_assert!(VNode::VList(list) = tiles(&[]));
        check!(list.is_empty());
    }
}
