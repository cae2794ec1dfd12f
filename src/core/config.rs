//! Game configuration.
//!
//! The external UI builds a `GameConfig` once and hands it to `Game::new`.
//! Everything has a default, so `GameConfig::default()` is a standard
//! draw-one game with a random deal.

use serde::{Deserialize, Serialize};

/// How many cards a single draw turns over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// Turn one card per draw.
    #[default]
    One,
    /// Turn up to three cards per draw.
    Three,
}

impl DrawMode {
    /// Number of cards turned per draw.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

/// Game configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deal seed. `None` picks a random seed at construction time.
    /// Same seed produces the same deal.
    pub seed: Option<u64>,

    /// Cards turned per draw.
    pub draw_mode: DrawMode,
}

impl GameConfig {
    /// Create a new config with a fixed deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with the given draw mode.
    #[must_use]
    pub fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }
}
