pub mod card_view;
pub mod game_info;
pub mod hand_view;
pub mod players_view;
