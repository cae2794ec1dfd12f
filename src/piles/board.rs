//! The pile set: seven tableau columns, four foundations, stock, and waste.
//!
//! Piles are ordered bottom-to-top; the top card is the last element.
//! They are persistent `im::Vector`s, so cloning a `Board` for history is
//! cheap and the clone never observes later changes to the original.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit, SuitMap};
use crate::core::position::TABLEAU_COLUMNS;

/// Total cards in a game.
pub const DECK_SIZE: usize = 52;

/// Cards per completed foundation.
pub const FOUNDATION_SIZE: usize = 13;

/// Complete card layout of a game.
///
/// ## Invariants
///
/// Maintained by every `Game` operation (see [`Board::tableau_is_well_formed`]
/// and [`Board::verify_card_set`]):
/// - each tableau column is a face-down prefix followed by a face-up,
///   alternating-color, strictly descending run;
/// - each foundation holds its own suit, Ace upward;
/// - stock cards are face-down, waste cards face-up;
/// - the 52 cards appear exactly once across all piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Tableau columns, index 0 (leftmost) to 6.
    pub tableau: [Vector<Card>; TABLEAU_COLUMNS],

    /// Foundation piles keyed by the suit they hold.
    pub foundations: SuitMap<Vector<Card>>,

    /// Face-down draw pile (top = end).
    pub stock: Vector<Card>,

    /// Face-up drawn cards (top = end).
    pub waste: Vector<Card>,
}

impl Board {
    /// Create a board with every pile empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    // === Accessors ===

    /// A tableau column. Panics if `column >= 7`.
    #[must_use]
    pub fn column(&self, column: usize) -> &Vector<Card> {
        &self.tableau[column]
    }

    /// The foundation pile for a suit.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Vector<Card> {
        &self.foundations[suit]
    }

    /// Top card of a tableau column.
    #[must_use]
    pub fn column_top(&self, column: usize) -> Option<&Card> {
        self.tableau.get(column)?.last()
    }

    /// Top card of the waste.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Card at a tableau cell, if the cell holds one.
    #[must_use]
    pub fn card_at(&self, column: usize, row: usize) -> Option<&Card> {
        self.tableau.get(column)?.get(row)
    }

    /// Row of the first face-up card in a column.
    #[must_use]
    pub fn first_face_up_row(&self, column: usize) -> Option<usize> {
        self.tableau
            .get(column)?
            .iter()
            .position(Card::is_face_up)
    }

    // === Counting ===

    /// Cards across every pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tableau.iter().map(Vector::len).sum::<usize>()
            + self.foundations.values().map(Vector::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// Cards already on foundations (0..=52).
    #[must_use]
    pub fn score(&self) -> usize {
        self.foundations.values().map(Vector::len).sum()
    }

    /// True when every foundation holds 13 cards.
    #[must_use]
    pub fn all_foundations_complete(&self) -> bool {
        self.foundations
            .values()
            .all(|pile| pile.len() == FOUNDATION_SIZE)
    }

    // === Invariant checks ===

    /// Check that the 52 distinct cards each appear exactly once.
    #[must_use]
    pub fn verify_card_set(&self) -> bool {
        let mut seen = FxHashSet::default();
        let all = self
            .tableau
            .iter()
            .flat_map(Vector::iter)
            .chain(self.foundations.values().flat_map(Vector::iter))
            .chain(self.stock.iter())
            .chain(self.waste.iter());

        for card in all {
            if !seen.insert(card.id()) {
                return false;
            }
        }
        seen.len() == DECK_SIZE
    }

    /// Check the per-pile ordering and orientation invariants.
    #[must_use]
    pub fn tableau_is_well_formed(&self) -> bool {
        let columns_ok = self.tableau.iter().all(|column| {
            let face_up_from = column
                .iter()
                .position(Card::is_face_up)
                .unwrap_or(column.len());
            let run: Vec<&Card> = column.iter().skip(face_up_from).collect();
            run.iter().all(|card| card.is_face_up())
                && run.windows(2).all(|pair| {
                    pair[0].color() != pair[1].color()
                        && pair[1].rank().next() == Some(pair[0].rank())
                })
        });

        let foundations_ok = self.foundations.iter().all(|(suit, pile)| {
            pile.iter()
                .enumerate()
                .all(|(i, card)| card.suit() == suit && usize::from(card.rank().value()) == i + 1)
        });

        columns_ok
            && foundations_ok
            && self.stock.iter().all(|card| !card.is_face_up())
            && self.waste.iter().all(Card::is_face_up)
    }

    // === Mutation helpers (unchecked; `Game` validates first) ===

    /// Detach the cards from `row` to the top of a column.
    pub(crate) fn take_run(&mut self, column: usize, row: usize) -> Vector<Card> {
        self.tableau[column].split_off(row)
    }

    /// Flip a column's top card face-up if it is face-down.
    ///
    /// Returns true if a card was flipped.
    pub(crate) fn reveal_top(&mut self, column: usize) -> bool {
        match self.tableau[column].back_mut() {
            Some(card) if !card.is_face_up() => {
                card.flip_up();
                true
            }
            _ => false,
        }
    }
}
