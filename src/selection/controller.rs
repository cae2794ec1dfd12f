//! The select/move state machine.
//!
//! ```text
//! Browsing --select on face-up tableau card--> TableauCardSelected(from)
//! Browsing --select on non-empty waste-------> WasteCardSelected
//! either selected state --select or cancel---> Browsing
//! ```
//!
//! The controller never touches cards itself. Moves go through a
//! [`PlaySurface`], which `Game` implements.

use log::trace;
use serde::{Deserialize, Serialize};

use super::cursor::{self, Direction};
use crate::cards::Suit;
use crate::core::{Cell, GameError, MoveError, Position, Source};
use crate::game::DrawOutcome;
use crate::piles::Board;

/// The operations the selection controller drives.
pub trait PlaySurface {
    /// Current layout, for cursor navigation and selection guards.
    fn board(&self) -> &Board;

    fn draw(&mut self) -> Result<DrawOutcome, GameError>;

    fn move_tableau_to_tableau(&mut self, from: Cell, to: usize) -> Result<(), GameError>;

    fn move_waste_to_tableau(&mut self, to: usize) -> Result<(), GameError>;

    fn move_to_foundation(&mut self, source: Source) -> Result<Suit, GameError>;
}

/// What is currently picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Browsing,
    /// A face-up tableau card (and everything on it) is picked up.
    TableauCardSelected(Cell),
    /// The top waste card is picked up.
    WasteCardSelected,
}

/// Cursor position plus selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionController {
    cursor: Position,
    state: SelectionState,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            cursor: Position::cell(0, 0),
            state: SelectionState::Browsing,
        }
    }
}

impl SelectionController {
    /// Browsing, cursor at the bottom of column 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The picked-up tableau cell, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Cell> {
        match self.state {
            SelectionState::TableauCardSelected(cell) => Some(cell),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.state != SelectionState::Browsing
    }

    /// Move the cursor one step. Selection state is unaffected.
    pub fn move_cursor(&mut self, board: &Board, direction: Direction) {
        let next = cursor::step(board, self.cursor, direction);
        trace!("Cursor {:?}: {} -> {}", direction, self.cursor, next);
        self.cursor = next;
    }

    /// Drop any selection. The cursor stays where it is.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Browsing;
    }

    /// Snap the cursor back onto a valid resting place.
    pub fn normalize(&mut self, board: &Board) {
        self.cursor = cursor::normalize(board, self.cursor);
    }

    /// Back to browsing with a valid cursor, after the board changed under us.
    pub fn reset(&mut self, board: &Board) {
        self.cancel();
        self.normalize(board);
    }

    /// Act on the cursor position.
    ///
    /// While browsing this picks up a card (or draws, on the stock). With a
    /// card picked up it attempts the move to the cursor and always returns
    /// to browsing, whether the move succeeded or not.
    pub fn select<S: PlaySurface>(&mut self, surface: &mut S) -> Result<(), GameError> {
        let result = match self.state {
            SelectionState::Browsing => return self.pick_up(surface),
            SelectionState::TableauCardSelected(from) => self.drop_tableau_card(surface, from),
            SelectionState::WasteCardSelected => self.drop_waste_card(surface),
        };
        self.reset(surface.board());
        result
    }

    fn pick_up<S: PlaySurface>(&mut self, surface: &mut S) -> Result<(), GameError> {
        if self.cursor == Position::Stock {
            surface.draw()?;
            self.normalize(surface.board());
            return Ok(());
        }

        let board = surface.board();
        match self.cursor {
            Position::Waste if board.waste_top().is_some() => {
                let row = board.column(0).len().saturating_sub(1);
                self.state = SelectionState::WasteCardSelected;
                self.cursor = Position::cell(0, row);
                trace!("Picked up waste card");
            }
            Position::Tableau(cell)
                if board
                    .card_at(cell.column, cell.row)
                    .is_some_and(|card| card.is_face_up()) =>
            {
                self.state = SelectionState::TableauCardSelected(cell);
                trace!("Picked up {}", cell);
            }
            _ => {}
        }
        Ok(())
    }

    fn drop_tableau_card<S: PlaySurface>(
        &mut self,
        surface: &mut S,
        from: Cell,
    ) -> Result<(), GameError> {
        match self.cursor {
            Position::Tableau(target) => surface.move_tableau_to_tableau(from, target.column),
            Position::Foundation(_) => {
                if from.row + 1 != surface.board().column(from.column).len() {
                    return Err(MoveError::NotTopCard.into());
                }
                surface.move_to_foundation(Source::Tableau(from.column)).map(drop)
            }
            Position::Stock | Position::Waste => Err(MoveError::InvalidPosition.into()),
        }
    }

    fn drop_waste_card<S: PlaySurface>(&mut self, surface: &mut S) -> Result<(), GameError> {
        match self.cursor {
            Position::Tableau(target) => surface.move_waste_to_tableau(target.column),
            Position::Foundation(_) => surface.move_to_foundation(Source::Waste).map(drop),
            Position::Stock | Position::Waste => Err(MoveError::InvalidPosition.into()),
        }
    }
}
