//! Rank and card value types.
//!
//! A `Card` is identified by its (suit, rank) pair. Only `face_up` ever
//! changes after a card is created; suit and rank are fixed.

use serde::{Deserialize, Serialize};

use super::suit::{Color, Suit};

/// Card rank, in the fixed order A, 2, ..., 10, J, Q, K.
///
/// "Consecutive", "ascending" and "descending" always mean adjacency in
/// this sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, `None` outside 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// The next rank up, `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// The next rank down, `None` for Ace.
    #[must_use]
    pub fn prev(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Equality compares suit, rank *and* orientation, so two snapshots of the
/// same pile are only equal when every card faces the same way. Use
/// [`Card::id`] for identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Stable identity in 0..52: `suit * 13 + (rank - 1)`.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.suit.index() as u8 * 13 + self.rank.value() - 1
    }

    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub fn flip_down(&mut self) {
        self.face_up = false;
    }

    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// The full 52-card deck, face-down, suits in `Suit::ALL` order.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn test_rank_neighbours() {
        assert_eq!(Rank::Ace.next(), Some(Rank::Two));
        assert_eq!(Rank::Ten.next(), Some(Rank::Jack));
        assert_eq!(Rank::King.next(), None);
        assert_eq!(Rank::Ace.prev(), None);
        assert_eq!(Rank::Queen.prev(), Some(Rank::Jack));
    }

    #[test]
    fn test_rank_from_value() {
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(13), Some(Rank::King));
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_card_color() {
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).color(), Color::Red);
        assert_eq!(Card::new(Rank::King, Suit::Spades).color(), Color::Black);
    }

    #[test]
    fn test_card_flip() {
        let mut card = Card::new(Rank::Seven, Suit::Clubs);
        assert!(!card.is_face_up());

        card.flip_up();
        assert!(card.is_face_up());

        card.flip_down();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_card_ids_unique() {
        let deck = Card::full_deck();
        assert_eq!(deck.len(), 52);

        let mut ids: Vec<_> = deck.iter().map(Card::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }
}
