use std::fmt;

use getset::CopyGetters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    /// The color of wild and +4 cards.
    Black,
}

impl Color {
    pub const MAIN: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Action,
    Wild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Value {
    pub const ALL: [Value; 15] = [
        Value::Zero,
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Skip,
        Value::Reverse,
        Value::DrawTwo,
        Value::Wild,
        Value::WildDrawFour,
    ];

    /// Points scored against a player left holding this card, following the
    /// official scale: face value for digits, 20 for actions, 50 for wilds.
    pub fn points(self) -> u32 {
        use Value::*;
        match self {
            Zero => 0,
            One => 1,
            Two => 2,
            Three => 3,
            Four => 4,
            Five => 5,
            Six => 6,
            Seven => 7,
            Eight => 8,
            Nine => 9,
            Skip | Reverse | DrawTwo => 20,
            Wild | WildDrawFour => 50,
        }
    }

    pub fn kind(self) -> CardKind {
        use Value::*;
        match self {
            Skip | Reverse | DrawTwo => CardKind::Action,
            Wild | WildDrawFour => CardKind::Wild,
            _ => CardKind::Number,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Value::*;
        let label = match self {
            Skip => "skip",
            Reverse => "reverse",
            DrawTwo => "+2",
            Wild => "wild",
            WildDrawFour => "+4",
            digit => return write!(f, "{}", digit.points()),
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct Card {
    id: CardId,
    color: Color,
    value: Value,
}

impl Card {
    pub fn new(id: CardId, color: Color, value: Value) -> Self {
        Self { id, color, value }
    }

    /// Whether this card can legally land on top of the discard pile given the
    /// color and value currently asked for. Black cards always can.
    pub fn is_playable(&self, active_color: Color, active_value: Value) -> bool {
        self.color == Color::Black || self.color == active_color || self.value == active_value
    }

    pub fn points(&self) -> u32 {
        self.value.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn card(color: Color, value: Value) -> Card {
        Card::new(CardId(0), color, value)
    }

    #[test]
    fn card_matching_active_color_is_playable() {
        check!(card(Color::Red, Value::Five).is_playable(Color::Red, Value::Nine));
    }

    #[test]
    fn card_matching_active_value_is_playable() {
        check!(card(Color::Blue, Value::Nine).is_playable(Color::Red, Value::Nine));
    }

    #[test]
    fn black_card_is_always_playable() {
        check!(card(Color::Black, Value::Wild).is_playable(Color::Red, Value::Nine));
        check!(card(Color::Black, Value::WildDrawFour).is_playable(Color::Green, Value::Zero));
    }

    #[test]
    fn card_matching_nothing_is_not_playable() {
        check!(!card(Color::Blue, Value::Five).is_playable(Color::Red, Value::Nine));
    }

    #[test]
    fn points_follow_official_scale() {
        check!(Value::Zero.points() == 0);
        check!(Value::Seven.points() == 7);
        check!(Value::Skip.points() == 20);
        check!(Value::Reverse.points() == 20);
        check!(Value::DrawTwo.points() == 20);
        check!(Value::Wild.points() == 50);
        check!(Value::WildDrawFour.points() == 50);
    }

    #[test]
    fn value_kinds() {
        check!(Value::Zero.kind() == CardKind::Number);
        check!(Value::DrawTwo.kind() == CardKind::Action);
        check!(Value::Wild.kind() == CardKind::Wild);
    }

    #[test]
    fn value_display_labels() {
        check!(Value::Eight.to_string() == "8");
        check!(Value::DrawTwo.to_string() == "+2");
        check!(Value::Wild.to_string() == "wild");
        check!(Value::WildDrawFour.to_string() == "+4");
        check!(Value::Skip.to_string() == "skip");
        check!(Value::Reverse.to_string() == "reverse");
    }
}
