pub const DOOM_GAME_MODES: &[&str] = &[
    "doom1",
    "doom1-ultimate",
    "doom1-share",
    "doom2",
    "doom2-plut",
    "doom2-tnt",
];

pub const HERETIC_GAME_MODES: &[&str] = &["heretic", "heretic-share", "heretic-ext"];

pub const HEXEN_GAME_MODES: &[&str] = &["hexen", "hexen-dk", "hexen-demo"];

/// The game families the add-on page is split into, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameFamily {
    Doom,
    Heretic,
    Hexen,
}

impl GameFamily {
    pub const ALL: [GameFamily; 3] = [GameFamily::Doom, GameFamily::Heretic, GameFamily::Hexen];

    pub fn name(&self) -> &'static str {
        match self {
            GameFamily::Doom => "DOOM",
            GameFamily::Heretic => "Heretic",
            GameFamily::Hexen => "Hexen",
        }
    }

    /// Site path of the page describing the game itself.
    pub fn home_path(&self) -> &'static str {
        match self {
            GameFamily::Doom => "/doom",
            GameFamily::Heretic => "/heretic",
            GameFamily::Hexen => "/hexen",
        }
    }

    pub fn game_modes(&self) -> &'static [&'static str] {
        match self {
            GameFamily::Doom => DOOM_GAME_MODES,
            GameFamily::Heretic => HERETIC_GAME_MODES,
            GameFamily::Hexen => HEXEN_GAME_MODES,
        }
    }

    /// Family a single game mode token belongs to, if any.
    pub fn of_game_mode(mode: &str) -> Option<GameFamily> {
        GameFamily::ALL
            .into_iter()
            .find(|family| family.game_modes().contains(&mode))
    }
}
