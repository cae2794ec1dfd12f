//! Point-in-time copies of game state.

use serde::{Deserialize, Serialize};

use crate::core::state::GameState;

/// An independent copy of a `GameState`, held only by `History`.
///
/// Piles share structure with the state they were captured from, but are
/// values: mutating the live state never changes a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    state: GameState,
}

impl GameSnapshot {
    /// Capture the given state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// The captured state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the snapshot, yielding the captured state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
