use std::fmt;

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::Hand;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Player {
    #[getset(get = "pub")]
    id: PlayerId,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    is_connected: bool,
    #[getset(get_copy = "pub")]
    said_uno: bool,
    #[getset(get = "pub")]
    hand: Hand,
}

// Two players are the same player iff their ids match.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Player {}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_connected: true,
            said_uno: false,
            hand: Hand::new(),
        }
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn set_connected(&mut self, is_connected: bool) {
        self.is_connected = is_connected;
    }

    pub fn set_said_uno(&mut self, said_uno: bool) {
        self.said_uno = said_uno;
    }
}
