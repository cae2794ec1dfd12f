//! Cursor navigation over the board.
//!
//! The cursor rests either on a top-row slot or on a face-up tableau card.
//! The one exception is row 0 of a column with no face-up cards (normally
//! an empty column). Every function here is pure: it reads the board and
//! returns the next `Position`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Position, TABLEAU_COLUMNS, TOP_ROW_SLOTS};
use crate::piles::Board;

/// A cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Horizontal step, or `None` for vertical directions.
    fn horizontal_delta(self) -> Option<isize> {
        match self {
            Direction::Left => Some(-1),
            Direction::Right => Some(1),
            Direction::Up | Direction::Down => None,
        }
    }
}

/// Rows of the face-up cards in a column, bottom to top.
///
/// A face-up stretch is a descending run, so it never holds more than 13
/// cards and stays inline.
#[must_use]
pub fn face_up_rows(board: &Board, column: usize) -> SmallVec<[usize; 13]> {
    board
        .tableau
        .get(column)
        .map(|cards| {
            cards
                .iter()
                .enumerate()
                .filter(|(_, card)| card.is_face_up())
                .map(|(row, _)| row)
                .collect()
        })
        .unwrap_or_default()
}

/// The face-up row nearest to `preferred`, or 0 when there is none.
fn resting_row(board: &Board, column: usize, preferred: usize) -> usize {
    face_up_rows(board, column)
        .into_iter()
        .min_by_key(|row| row.abs_diff(preferred))
        .unwrap_or(0)
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Snap a position onto a valid resting place.
#[must_use]
pub fn normalize(board: &Board, position: Position) -> Position {
    match position {
        Position::Tableau(cell) => {
            let column = cell.column.min(TABLEAU_COLUMNS - 1);
            Position::cell(column, resting_row(board, column, cell.row))
        }
        other => other,
    }
}

/// Where the cursor lands after moving one step from `position`.
#[must_use]
pub fn step(board: &Board, position: Position, direction: Direction) -> Position {
    let current = normalize(board, position);

    match current {
        Position::Tableau(cell) => step_in_tableau(board, cell, direction),
        _ => {
            let slot = current.top_slot_index().unwrap_or(0);
            match direction {
                Direction::Up => current,
                Direction::Down => {
                    let column = slot.min(TABLEAU_COLUMNS - 1);
                    let row = board.first_face_up_row(column).unwrap_or(0);
                    Position::cell(column, row)
                }
                Direction::Left | Direction::Right => {
                    let delta = direction.horizontal_delta().unwrap_or(0);
                    Position::top_slot(wrap(slot, delta, TOP_ROW_SLOTS)).unwrap_or(current)
                }
            }
        }
    }
}

fn step_in_tableau(board: &Board, cell: Cell, direction: Direction) -> Position {
    let rows = face_up_rows(board, cell.column);
    let index = rows.iter().position(|&row| row == cell.row);

    match direction {
        Direction::Up => match index {
            Some(i) if i > 0 => Position::cell(cell.column, rows[i - 1]),
            _ => Position::top_slot(cell.column.min(TOP_ROW_SLOTS - 1))
                .unwrap_or(Position::Tableau(cell)),
        },
        Direction::Down => match index {
            Some(i) if i + 1 < rows.len() => Position::cell(cell.column, rows[i + 1]),
            _ => Position::Tableau(cell),
        },
        Direction::Left | Direction::Right => {
            let delta = direction.horizontal_delta().unwrap_or(0);
            let column = wrap(cell.column, delta, TABLEAU_COLUMNS);
            Position::cell(column, resting_row(board, column, cell.row))
        }
    }
}
