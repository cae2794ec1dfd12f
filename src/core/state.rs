//! Live game state.
//!
//! `GameState` is everything undo/redo must restore: the card layout plus
//! the move counter and the won flag. The cursor and selection are not part
//! of it; they belong to the UI-facing selection controller.

use serde::{Deserialize, Serialize};

use crate::piles::Board;

/// Complete restorable game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Card layout.
    pub board: Board,

    /// Successful mutating actions so far (draws and moves).
    pub move_count: u32,

    /// Set once, on the first transition to all foundations complete.
    pub won: bool,
}

impl GameState {
    /// Create a state for a freshly dealt board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            move_count: 0,
            won: false,
        }
    }

    /// Count one successful action.
    pub(crate) fn record_move(&mut self) {
        self.move_count += 1;
    }
}
