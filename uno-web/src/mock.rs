//! The hard-coded data every page renders. Nothing in the prototype mutates
//! these; they stand in for the not-yet-built backend state.

use uno_core::{Card, CardId, Color, Hand, PlayerId, Value};

/// Display-only roster entry: what the table shows about each opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStatus {
    pub id: PlayerId,
    pub name: String,
    pub card_count: usize,
    pub said_uno: bool,
}

pub fn players() -> Vec<PlayerStatus> {
    vec![
        PlayerStatus {
            id: PlayerId("p2".into()),
            name: "Antoine".into(),
            card_count: 5,
            said_uno: false,
        },
        PlayerStatus {
            id: PlayerId("p3".into()),
            name: "Lucien".into(),
            card_count: 3,
            said_uno: true,
        },
    ]
}

/// The player whose seat is highlighted as "currently playing".
pub fn current_player_id() -> PlayerId {
    PlayerId("p2".into())
}

pub fn current_player_name() -> &'static str {
    "Sisox"
}

pub fn my_hand() -> Vec<Card> {
    vec![
        Card::new(CardId(1), Color::Red, Value::Five),
        Card::new(CardId(2), Color::Blue, Value::DrawTwo),
        Card::new(CardId(3), Color::Green, Value::Seven),
        Card::new(CardId(4), Color::Black, Value::Wild),
    ]
}

pub fn top_card() -> Card {
    Card::new(CardId(5), Color::Red, Value::Eight)
}

pub fn lobby_players() -> Vec<PlayerStatus> {
    vec![
        PlayerStatus {
            id: PlayerId("p2".into()),
            name: "Antoine".into(),
            card_count: 0,
            said_uno: false,
        },
        PlayerStatus {
            id: PlayerId("p3".into()),
            name: "Lucien".into(),
            card_count: 0,
            said_uno: false,
        },
    ]
}

pub fn winner_name() -> &'static str {
    "Antoine"
}

/// Points left in each loser's hand, counted for the winner.
pub fn final_scores() -> Vec<(String, u32)> {
    let mut lucien = Hand::new();
    lucien.add(Card::new(CardId(6), Color::Yellow, Value::Nine));
    lucien.add(Card::new(CardId(7), Color::Red, Value::Skip));
    lucien.add(Card::new(CardId(8), Color::Black, Value::WildDrawFour));
    vec![("Lucien".into(), lucien.points())]
}
