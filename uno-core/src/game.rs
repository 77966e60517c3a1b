use std::fmt;

use getset::{CopyGetters, Getters, Setters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Deck, DiscardPile, Player, PlayerId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot join: the game has already started")]
    AlreadyStarted,
    #[error("cannot join: the game is full")]
    GameFull,
}
pub(crate) type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    WaitingForPlayers,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "Clockwise"),
            Direction::CounterClockwise => write!(f, "Counter-clockwise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One table: the players around it, the two piles, and whose turn it is.
#[derive(Debug, Clone, Getters, CopyGetters, Setters, Serialize, Deserialize)]
pub struct Game {
    #[getset(get = "pub")]
    id: GameId,
    #[getset(get_copy = "pub", set = "pub")]
    status: GameStatus,
    #[getset(get_copy = "pub")]
    direction: Direction,
    players: Vec<Player>,
    #[getset(get_copy = "pub")]
    current_player_index: usize,
    #[getset(get = "pub")]
    deck: Deck,
    #[getset(get = "pub")]
    discard_pile: DiscardPile,
    #[getset(get_copy = "pub")]
    max_players: usize,
    #[getset(get_copy = "pub", set = "pub")]
    active_color: Option<Color>,
}

impl Game {
    pub fn new(id: GameId, deck: Deck, max_players: usize) -> Self {
        Self {
            id,
            status: GameStatus::WaitingForPlayers,
            direction: Direction::Clockwise,
            players: Vec::new(),
            current_player_index: 0,
            deck,
            discard_pile: DiscardPile::new(),
            max_players,
            active_color: None,
        }
    }

    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.status != GameStatus::WaitingForPlayers {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() >= self.max_players {
            return Err(GameError::GameFull);
        }
        self.players.push(player);
        Ok(())
    }

    /// Removes a player from the table. Only allowed while the game is still
    /// waiting; once cards are dealt a leaver merely disconnects.
    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        if self.status != GameStatus::WaitingForPlayers {
            return false;
        }
        match self.players.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.players.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn player_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn player_by_id_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reverse();
    }

    /// Steps the turn to the next seat, following the current direction and
    /// wrapping around the table.
    pub fn advance_turn(&mut self) {
        let count = self.players.len();
        if count == 0 {
            return;
        }
        self.current_player_index = match self.direction {
            Direction::Clockwise => (self.current_player_index + 1) % count,
            Direction::CounterClockwise => (self.current_player_index + count - 1) % count,
        };
    }

    /// Whether the player whose turn it is has emptied their hand.
    pub fn current_player_wins(&self) -> bool {
        self.current_player().is_some_and(|p| p.hand().is_empty())
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn discard_pile_mut(&mut self) -> &mut DiscardPile {
        &mut self.discard_pile
    }
}
