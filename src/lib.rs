//! # klondike-engine
//!
//! Game-state engine for Klondike Solitaire.
//!
//! ## Design Principles
//!
//! 1. **Reject, don't corrupt**: every move is validated before anything
//!    changes. A rejected move returns an error and leaves the game as it was.
//!
//! 2. **Snapshot history**: each action saves the full pre-action state.
//!    Piles are persistent vectors (`im-rs`), so a snapshot is cheap and
//!    never aliases the live state.
//!
//! 3. **Input-agnostic**: the cursor/selection state machine consumes
//!    abstract `Command`s. Key bindings and rendering live elsewhere.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, cards
//! - `core`: positions, configuration, errors, RNG, game state
//! - `piles`: the board and the initial deal
//! - `rules`: tableau and foundation placement rules
//! - `history`: undo/redo
//! - `selection`: cursor navigation and the select/move state machine
//! - `game`: the game controller and command session
//!
//! ```
//! use klondike_engine::{Command, GameConfig, Outcome, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(42));
//! assert_eq!(session.apply(Command::Draw), Ok(Outcome::Continue));
//! assert_eq!(session.game().board().waste.len(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod history;
pub mod piles;
pub mod rules;
pub mod selection;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Rank, Suit, SuitMap};

pub use crate::core::{
    Cell, DrawMode, GameConfig, GameError, GameRng, GameRngState, GameState, MoveError, Position,
    Source,
};

pub use crate::piles::{Board, deal, deal_from};

pub use crate::history::{GameSnapshot, History};

pub use crate::selection::{Direction, PlaySurface, SelectionController, SelectionState};

pub use crate::game::{AutoMove, Command, DrawOutcome, Game, Outcome, Session};
