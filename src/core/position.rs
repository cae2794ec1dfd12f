//! Addressing for piles and cards.
//!
//! ## Layout
//!
//! ```text
//!  top row:  [stock] [waste] [♥] [♦] [♣] [♠]      slots 0..6
//!  tableau:  col 0  col 1  ...  col 6            rows = depth from the bottom
//! ```
//!
//! `Position` is what the cursor rests on. `Cell` addresses one card slot in
//! a tableau column. `Source` names the two piles a single card may leave
//! for a foundation.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of top-row slots: stock, waste, and four foundations.
pub const TOP_ROW_SLOTS: usize = 6;

/// A card slot inside a tableau column. Row 0 is the bottom card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}:{}", self.column, self.row)
    }
}

/// Something the cursor can rest on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Tableau(Cell),
    Stock,
    Waste,
    Foundation(Suit),
}

impl Position {
    /// Tableau position shorthand.
    #[must_use]
    pub const fn cell(column: usize, row: usize) -> Self {
        Position::Tableau(Cell::new(column, row))
    }

    /// Top-row slot for an index: 0 stock, 1 waste, 2..6 foundations in
    /// `Suit::ALL` order.
    #[must_use]
    pub const fn top_slot(index: usize) -> Option<Position> {
        match index {
            0 => Some(Position::Stock),
            1 => Some(Position::Waste),
            n => match Suit::from_index(n - 2) {
                Some(suit) => Some(Position::Foundation(suit)),
                None => None,
            },
        }
    }

    /// Index of this position in the top row, `None` for tableau cells.
    #[must_use]
    pub const fn top_slot_index(&self) -> Option<usize> {
        match self {
            Position::Tableau(_) => None,
            Position::Stock => Some(0),
            Position::Waste => Some(1),
            Position::Foundation(suit) => Some(2 + suit.index()),
        }
    }

    #[must_use]
    pub const fn is_top_row(&self) -> bool {
        !matches!(self, Position::Tableau(_))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Tableau(cell) => write!(f, "{}", cell),
            Position::Stock => f.write_str("stock"),
            Position::Waste => f.write_str("waste"),
            Position::Foundation(suit) => write!(f, "foundation {}", suit),
        }
    }
}

/// A pile a single card can be taken from for a foundation move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Waste,
    Tableau(usize),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Waste => f.write_str("waste"),
            Source::Tableau(column) => write!(f, "T{}", column),
        }
    }
}
