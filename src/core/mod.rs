//! Core engine types: RNG, configuration, errors, addressing, and state.
//!
//! These are the building blocks every other module shares. Nothing here
//! knows about move rules or the cursor.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod state;

pub use config::{DrawMode, GameConfig};
pub use error::{GameError, MoveError};
pub use position::{Cell, Position, Source, TABLEAU_COLUMNS, TOP_ROW_SLOTS};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
