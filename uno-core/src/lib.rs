mod card;
mod code;
mod deck;
mod game;
mod hand;
mod pile;
mod player;

pub use card::*;
pub use code::*;
pub use deck::*;
pub use game::*;
pub use hand::*;
pub use pile::*;
pub use player::*;
