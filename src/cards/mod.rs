//! Card model: suits, ranks, colors, and cards.
//!
//! ## Key Types
//!
//! - `Suit`: One of four suits, with its `Color`
//! - `SuitMap`: Fixed four-slot storage indexed by `Suit`
//! - `Rank`: Ace through King in play order
//! - `Card`: A (suit, rank) pair plus its face-up flag
//!
//! Exactly 52 cards exist in a game. They are created once at deal time and
//! only ever change pile or orientation.

pub mod card;
pub mod suit;

pub use card::{Card, Rank};
pub use suit::{Color, Suit, SuitMap};
