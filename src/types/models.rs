pub mod addon;
pub mod game_mode;
