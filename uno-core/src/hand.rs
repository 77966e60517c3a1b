use serde::{Deserialize, Serialize};

use crate::{Card, CardId, Color, Value};

/// The ordered cards held by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first occurrence of `card`. Returns whether the hand changed.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|c| *c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total points this hand is worth to the winner when the round ends.
    pub fn points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    pub fn has_playable(&self, active_color: Color, active_value: Value) -> bool {
        self.cards
            .iter()
            .any(|card| card.is_playable(active_color, active_value))
    }

    pub fn playable_cards(&self, active_color: Color, active_value: Value) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.is_playable(active_color, active_value))
            .copied()
            .collect()
    }

    pub fn card_by_id(&self, id: CardId) -> Option<Card> {
        self.cards.iter().find(|card| card.id() == id).copied()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    fn card(id: u32, color: Color, value: Value) -> Card {
        Card::new(CardId(id), color, value)
    }

    fn sample_hand() -> Hand {
        let mut hand = Hand::new();
        hand.add(card(1, Color::Red, Value::Five));
        hand.add(card(2, Color::Blue, Value::DrawTwo));
        hand.add(card(3, Color::Green, Value::Seven));
        hand.add(card(4, Color::Black, Value::Wild));
        hand
    }

    #[test]
    fn new_hand_is_empty() {
        let hand = Hand::new();
        check!(hand.is_empty());
        check!(hand.len() == 0);
        check!(hand.points() == 0);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let hand = sample_hand();
        check!(hand.len() == 4);
        let values: Vec<_> = hand.cards().iter().map(|c| c.value()).collect();
        check!(values == [Value::Five, Value::DrawTwo, Value::Seven, Value::Wild]);
    }

    #[test]
    fn remove_present_card_shrinks_hand() {
        let mut hand = sample_hand();
        check!(hand.remove(card(2, Color::Blue, Value::DrawTwo)));
        check!(hand.len() == 3);
        check!(hand.card_by_id(CardId(2)).is_none());
    }

    #[test]
    fn remove_absent_card_is_a_no_op() {
        let mut hand = sample_hand();
        check!(!hand.remove(card(99, Color::Red, Value::Zero)));
        check!(hand.len() == 4);
    }

    #[test]
    fn points_sum_over_all_cards() {
        // 5 + 20 + 7 + 50
        check!(sample_hand().points() == 82);
    }

    #[test]
    fn playable_cards_against_active_red_nine() {
        let hand = sample_hand();
        check!(hand.has_playable(Color::Red, Value::Nine));
        let playable = hand.playable_cards(Color::Red, Value::Nine);
        let ids: Vec<_> = playable.iter().map(|c| c.id()).collect();
        // the red five by color, the wild because it is black
        check!(ids == [CardId(1), CardId(4)]);
    }

    #[test]
    fn hand_of_only_mismatches_has_nothing_playable() {
        let mut hand = Hand::new();
        hand.add(card(1, Color::Blue, Value::Five));
        check!(!hand.has_playable(Color::Red, Value::Nine));
        check!(hand.playable_cards(Color::Red, Value::Nine).is_empty());
    }

    #[test]
    fn card_by_id_finds_the_card() {
        let hand = sample_hand();
        let_assert!(Some(found) = hand.card_by_id(CardId(3)));
        check!(found.value() == Value::Seven);
        check!(hand.card_by_id(CardId(42)).is_none());
    }

    #[test]
    fn clear_empties_the_hand() {
        let mut hand = sample_hand();
        hand.clear();
        check!(hand.is_empty());
    }
}
