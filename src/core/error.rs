//! Engine errors.
//!
//! Every error here is recoverable: the attempted operation is rejected and
//! the game state is left exactly as it was. The UI shows the message and
//! waits for the next command.

use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveError {
    /// Destination rank is not exactly one above (tableau) the moving card.
    WrongRank,
    /// Moving card has the same color as the tableau destination.
    WrongColor,
    /// Only a King may be placed on an empty column.
    EmptyColumnNeedsKing,
    /// The selected tableau card is face-down.
    FaceDownSource,
    /// Source and destination are the same column.
    SameColumnMove,
    /// Only an Ace may start a foundation.
    FoundationWrongStart,
    /// Card does not continue its foundation's sequence.
    FoundationWrongSequence,
    /// The source pile has no card to move.
    EmptySource,
    /// The destination's top card is face-down.
    FaceDownTarget,
    /// Only a pile's top card may go to a foundation.
    NotTopCard,
    /// The position does not address a card or pile usable for this move.
    InvalidPosition,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MoveError::WrongRank => "card must be one rank lower than the destination",
            MoveError::WrongColor => "card must be the opposite color of the destination",
            MoveError::EmptyColumnNeedsKing => "only a King can be placed on an empty column",
            MoveError::FaceDownSource => "cannot move a face-down card",
            MoveError::SameColumnMove => "source and destination are the same column",
            MoveError::FoundationWrongStart => "a foundation must start with an Ace",
            MoveError::FoundationWrongSequence => "card does not continue the foundation",
            MoveError::EmptySource => "there is no card to move",
            MoveError::FaceDownTarget => "destination card is face-down",
            MoveError::NotTopCard => "only the top card can go to a foundation",
            MoveError::InvalidPosition => "nothing to move there",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

/// Errors returned by engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameError {
    /// The move breaks a rule; state is unchanged.
    InvalidMove(MoveError),
    /// Undo or redo with an empty history stack.
    NoHistory,
    /// Auto-move found no legal destination for the card.
    NoValidMove,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "invalid move: {}", reason),
            GameError::NoHistory => f.write_str("nothing to undo or redo"),
            GameError::NoValidMove => f.write_str("no valid move for that card"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(reason: MoveError) -> Self {
        GameError::InvalidMove(reason)
    }
}
