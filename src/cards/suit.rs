//! Suits, colors, and per-suit storage.
//!
//! ## Suit
//!
//! The four French suits. Foundation slots are displayed in `Suit::ALL`
//! order: hearts, diamonds, clubs, spades.
//!
//! ## SuitMap
//!
//! Fixed four-slot storage indexed by `Suit`. Foundations live in a
//! `SuitMap`, so a pile can only ever be looked up by the suit it holds.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Card color. Derived from the suit, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in foundation display order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Slot index of this suit (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit for a slot index, `None` past 3.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Hearts and diamonds are red, clubs and spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-glyph symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-suit storage with O(1) access.
///
/// Backed by a `[T; 4]` in `Suit::ALL` order.
///
/// ## Example
///
/// ```
/// use klondike_engine::cards::{Suit, SuitMap};
///
/// let mut counts: SuitMap<u8> = SuitMap::default();
/// counts[Suit::Spades] = 3;
///
/// assert_eq!(counts[Suit::Spades], 3);
/// assert_eq!(counts[Suit::Hearts], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 4],
}

impl<T> SuitMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: Suit::ALL.map(factory),
        }
    }

    #[must_use]
    pub fn get(&self, suit: Suit) -> &T {
        &self.data[suit.index()]
    }

    pub fn get_mut(&mut self, suit: Suit) -> &mut T {
        &mut self.data[suit.index()]
    }

    /// Iterate over (Suit, &T) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the stored values in display order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &Self::Output {
        self.get(suit)
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut Self::Output {
        self.get_mut(suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn test_suit_index_roundtrip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_index(suit.index()), Some(suit));
        }
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn test_suit_map_new() {
        let map = SuitMap::new(|s| s.index() * 10);

        assert_eq!(map[Suit::Hearts], 0);
        assert_eq!(map[Suit::Diamonds], 10);
        assert_eq!(map[Suit::Clubs], 20);
        assert_eq!(map[Suit::Spades], 30);
    }

    #[test]
    fn test_suit_map_mutation_and_iter() {
        let mut map: SuitMap<Vec<u8>> = SuitMap::default();
        map[Suit::Clubs].push(1);

        let pairs: Vec<_> = map.iter().map(|(s, v)| (s, v.len())).collect();
        assert_eq!(
            pairs,
            vec![
                (Suit::Hearts, 0),
                (Suit::Diamonds, 0),
                (Suit::Clubs, 1),
                (Suit::Spades, 0)
            ]
        );
    }

    #[test]
    fn test_suit_map_serialization() {
        let map = SuitMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SuitMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
