use serde::{Deserialize, Serialize};

use crate::Card;

/// The discard pile. Cards land on top as they are played; the last element of
/// the backing vec is the visible top card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Drains every card below the top, leaving only the visible card in
    /// place. This is what feeds the draw pile when it runs dry.
    pub fn extract_all_but_top(&mut self) -> Vec<Card> {
        let Some(top) = self.cards.pop() else {
            return Vec::new();
        };
        let body = std::mem::take(&mut self.cards);
        self.cards.push(top);
        body
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
