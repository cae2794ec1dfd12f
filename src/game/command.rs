//! Abstract input commands.

use serde::{Deserialize, Serialize};

use crate::selection::Direction;

/// One player input, independent of any key binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveCursor(Direction),
    Select,
    /// Drop the current selection.
    Cancel,
    Draw,
    Undo,
    Redo,
    AutoComplete,
    /// Send the card under the cursor to the best destination.
    AutoMove,
    Quit,
}

impl Command {
    /// Commands that act on the engine directly, bypassing the selection
    /// state machine. The selection is reset after them.
    #[must_use]
    pub fn acts_on_engine(&self) -> bool {
        matches!(
            self,
            Command::Draw
                | Command::Undo
                | Command::Redo
                | Command::AutoComplete
                | Command::AutoMove
        )
    }

    /// Commands that can put a card on a foundation.
    #[must_use]
    pub fn can_complete_game(&self) -> bool {
        matches!(self, Command::Select | Command::AutoComplete | Command::AutoMove)
    }
}
