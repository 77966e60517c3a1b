use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{Card, CardId, Color, Value};

/// The draw pile. The last card of the backing vec is the top of the pile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds the official 108-card deck: per main color one 0, two of each of
    /// 1-9, skip, reverse and +2, plus four wilds and four +4.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(108);
        let mut next_id = 1u32;
        let mut push = |cards: &mut Vec<Card>, color, value| {
            cards.push(Card::new(CardId(next_id), color, value));
            next_id += 1;
        };

        for color in Color::MAIN {
            push(&mut cards, color, Value::Zero);
            for value in Value::ALL {
                if matches!(value, Value::Zero | Value::Wild | Value::WildDrawFour) {
                    continue;
                }
                for _ in 0..2 {
                    push(&mut cards, color, value);
                }
            }
        }
        for _ in 0..4 {
            push(&mut cards, Color::Black, Value::Wild);
        }
        for _ in 0..4 {
            push(&mut cards, Color::Black, Value::WildDrawFour);
        }

        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` when the pile ran dry.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts `cards` back under consideration, typically the reshuffled body of
    /// the discard pile. Returns whether anything was added.
    pub fn refill(&mut self, cards: Vec<Card>) -> bool {
        if cards.is_empty() {
            return false;
        }
        self.cards.extend(cards);
        true
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
