//! Game controller and command session.
//!
//! ## Key Types
//!
//! - `Game`: owns state and history, performs every move
//! - `Command`: one abstract player input
//! - `Session`: a `Game` plus cursor, applying `Command`s

pub mod command;
pub mod klondike;
pub mod session;

pub use command::Command;
pub use klondike::{AutoMove, DrawOutcome, Game};
pub use session::{Outcome, Session};
