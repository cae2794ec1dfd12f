//! Pure move-legality predicates.
//!
//! ## Tableau
//!
//! An empty column accepts only a King. Otherwise the destination top must
//! be face-up, of the opposite color, and exactly one rank above the moving
//! card. Multi-card runs are checked by their bottom card only: the rest of
//! a face-up run already satisfies the same rule.
//!
//! ## Foundation
//!
//! An empty foundation accepts only an Ace; otherwise the moving card must
//! be exactly one rank above the top. Suit is not checked here. Callers must
//! pass the foundation keyed by the moving card's suit, which
//! [`check_foundation_placement`] does for them.

use crate::cards::Card;
use crate::core::error::MoveError;
use crate::piles::Board;

/// Check placing `moving` (or a run whose bottom card is `moving`) onto a
/// tableau column whose top is `destination_top`.
pub fn check_tableau_move(moving: &Card, destination_top: Option<&Card>) -> Result<(), MoveError> {
    let Some(top) = destination_top else {
        return if moving.is_king() {
            Ok(())
        } else {
            Err(MoveError::EmptyColumnNeedsKing)
        };
    };

    if !top.is_face_up() {
        return Err(MoveError::FaceDownTarget);
    }
    if moving.color() == top.color() {
        return Err(MoveError::WrongColor);
    }
    if moving.rank().next() != Some(top.rank()) {
        return Err(MoveError::WrongRank);
    }
    Ok(())
}

/// Boolean form of [`check_tableau_move`].
#[must_use]
pub fn tableau_move_allowed(moving: &Card, destination_top: Option<&Card>) -> bool {
    check_tableau_move(moving, destination_top).is_ok()
}

/// Check placing `moving` onto a foundation whose top is `foundation_top`.
///
/// `foundation_top` must come from the foundation for `moving.suit()`.
pub fn check_foundation_move(
    moving: &Card,
    foundation_top: Option<&Card>,
) -> Result<(), MoveError> {
    match foundation_top {
        None if moving.is_ace() => Ok(()),
        None => Err(MoveError::FoundationWrongStart),
        Some(top) if top.rank().next() == Some(moving.rank()) => Ok(()),
        Some(_) => Err(MoveError::FoundationWrongSequence),
    }
}

/// Boolean form of [`check_foundation_move`].
#[must_use]
pub fn foundation_move_allowed(moving: &Card, foundation_top: Option<&Card>) -> bool {
    check_foundation_move(moving, foundation_top).is_ok()
}

/// Check `card` against its own suit's foundation on `board`.
pub fn check_foundation_placement(board: &Board, card: &Card) -> Result<(), MoveError> {
    check_foundation_move(card, board.foundation(card.suit()).last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn up(rank: Rank, suit: Suit) -> Card {
        Card::face_up(rank, suit)
    }

    #[test]
    fn test_empty_column_needs_king() {
        assert!(tableau_move_allowed(&up(Rank::King, Suit::Clubs), None));
        assert_eq!(
            check_tableau_move(&up(Rank::Queen, Suit::Hearts), None),
            Err(MoveError::EmptyColumnNeedsKing)
        );
    }

    #[test]
    fn test_queen_on_king() {
        let king = up(Rank::King, Suit::Spades);

        assert!(tableau_move_allowed(&up(Rank::Queen, Suit::Hearts), Some(&king)));
        assert_eq!(
            check_tableau_move(&up(Rank::Queen, Suit::Spades), Some(&king)),
            Err(MoveError::WrongColor)
        );
    }

    #[test]
    fn test_tableau_wrong_rank() {
        let nine = up(Rank::Nine, Suit::Diamonds);

        assert_eq!(
            check_tableau_move(&up(Rank::Seven, Suit::Clubs), Some(&nine)),
            Err(MoveError::WrongRank)
        );
        assert_eq!(
            check_tableau_move(&up(Rank::Ten, Suit::Clubs), Some(&nine)),
            Err(MoveError::WrongRank)
        );
        assert!(tableau_move_allowed(&up(Rank::Eight, Suit::Clubs), Some(&nine)));
    }

    #[test]
    fn test_tableau_face_down_target() {
        let hidden = Card::new(Rank::Nine, Suit::Diamonds);
        assert_eq!(
            check_tableau_move(&up(Rank::Eight, Suit::Clubs), Some(&hidden)),
            Err(MoveError::FaceDownTarget)
        );
    }

    #[test]
    fn test_tableau_rule_exhaustive() {
        for top_suit in Suit::ALL {
            for top_rank in Rank::ALL {
                let top = up(top_rank, top_suit);
                for suit in Suit::ALL {
                    for rank in Rank::ALL {
                        let card = up(rank, suit);
                        let expected =
                            card.color() != top.color() && rank.value() + 1 == top_rank.value();
                        assert_eq!(tableau_move_allowed(&card, Some(&top)), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_foundation_start() {
        assert!(foundation_move_allowed(&up(Rank::Ace, Suit::Hearts), None));
        assert_eq!(
            check_foundation_move(&up(Rank::Two, Suit::Hearts), None),
            Err(MoveError::FoundationWrongStart)
        );
    }

    #[test]
    fn test_foundation_sequence() {
        let top = up(Rank::Five, Suit::Clubs);
        for rank in Rank::ALL {
            let allowed = foundation_move_allowed(&up(rank, Suit::Clubs), Some(&top));
            assert_eq!(allowed, rank == Rank::Six, "{:?}", rank);
        }
        assert_eq!(
            check_foundation_move(&up(Rank::Seven, Suit::Clubs), Some(&top)),
            Err(MoveError::FoundationWrongSequence)
        );
    }

    #[test]
    fn test_foundation_placement_uses_card_suit() {
        let mut board = Board::empty();
        board.foundations[Suit::Spades].push_back(up(Rank::Ace, Suit::Spades));

        // Two of hearts looks at the empty hearts pile, not the spades pile.
        assert_eq!(
            check_foundation_placement(&board, &up(Rank::Two, Suit::Hearts)),
            Err(MoveError::FoundationWrongStart)
        );
        assert!(check_foundation_placement(&board, &up(Rank::Two, Suit::Spades)).is_ok());
    }
}
