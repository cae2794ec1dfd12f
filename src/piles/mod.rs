//! Pile set and dealer.
//!
//! ## Key Types
//!
//! - `Board`: tableau, foundations, stock, and waste as owned ordered piles
//! - `deal` / `deal_from`: the shuffle-and-deal that starts every game

pub mod board;
pub mod dealer;

pub use board::{Board, DECK_SIZE, FOUNDATION_SIZE};
pub use dealer::{deal, deal_from, STOCK_AFTER_DEAL};
