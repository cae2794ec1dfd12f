//! Linear undo/redo over full-state snapshots.
//!
//! Every mutating operation calls [`History::save_state`] with the state as
//! it is *before* the mutation. A new save after an undo drops the redo
//! stack: history is a line, not a tree.

use serde::{Deserialize, Serialize};

use super::snapshot::GameSnapshot;
use crate::core::error::GameError;
use crate::core::state::GameState;

/// Two LIFO stacks of snapshots.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    undo_stack: Vec<GameSnapshot>,
    redo_stack: Vec<GameSnapshot>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a copy of the pre-mutation state and clear forward history.
    pub fn save_state(&mut self, current: &GameState) {
        self.undo_stack.push(GameSnapshot::capture(current));
        self.redo_stack.clear();
    }

    /// Step back one action.
    ///
    /// The current state moves to the redo stack and the most recent
    /// snapshot becomes live. Fails with `NoHistory` when there is nothing
    /// to undo; `live` is untouched in that case.
    pub fn undo(&mut self, live: &mut GameState) -> Result<(), GameError> {
        let snapshot = self.undo_stack.pop().ok_or(GameError::NoHistory)?;
        self.redo_stack.push(GameSnapshot::capture(live));
        *live = snapshot.into_state();
        Ok(())
    }

    /// Step forward one undone action. Mirror of [`History::undo`].
    pub fn redo(&mut self, live: &mut GameState) -> Result<(), GameError> {
        let snapshot = self.redo_stack.pop().ok_or(GameError::NoHistory)?;
        self.undo_stack.push(GameSnapshot::capture(live));
        *live = snapshot.into_state();
        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget everything (new deal).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
