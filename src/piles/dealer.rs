//! Shuffle and deal.
//!
//! Standard Klondike deal: seven rounds, round `r` places one card on each
//! column `r..7`, so column `i` ends with `i + 1` cards. The last card of
//! each column is turned face-up. The remaining 24 cards form the stock in
//! the order they would have continued to be dealt.

use im::Vector;

use super::board::{Board, DECK_SIZE};
use crate::cards::Card;
use crate::core::position::TABLEAU_COLUMNS;
use crate::core::rng::GameRng;

/// Cards left in the stock after the deal.
pub const STOCK_AFTER_DEAL: usize = DECK_SIZE - TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

/// Build a fresh deck, shuffle it with `rng`, and deal it.
#[must_use]
pub fn deal(rng: &mut GameRng) -> Board {
    let mut deck = Card::full_deck();
    rng.shuffle(&mut deck);
    deal_from(deck)
}

/// Deal an already-ordered deck. Cards are taken from the end of `deck`.
///
/// Panics if `deck` does not hold exactly 52 cards.
#[must_use]
pub fn deal_from(mut deck: Vec<Card>) -> Board {
    assert_eq!(deck.len(), DECK_SIZE, "A deal needs exactly {} cards", DECK_SIZE);

    let mut board = Board::empty();

    for round in 0..TABLEAU_COLUMNS {
        for column in round..TABLEAU_COLUMNS {
            if let Some(mut card) = deck.pop() {
                card.flip_down();
                board.tableau[column].push_back(card);
            }
        }
    }

    for column in 0..TABLEAU_COLUMNS {
        board.reveal_top(column);
    }

    board.stock = deck
        .into_iter()
        .map(|mut card| {
            card.flip_down();
            card
        })
        .collect::<Vector<Card>>();

    debug_assert!(board.verify_card_set());
    debug_assert!(board.tableau_is_well_formed());
    board
}
