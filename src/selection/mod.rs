//! Cursor and selection.
//!
//! Turns abstract navigation and select commands into moves, independent of
//! how those commands are produced.
//!
//! ## Key Types
//!
//! - `Direction`: one cursor step
//! - `SelectionController`: cursor position plus the select/move state machine
//! - `SelectionState`: browsing, or a tableau/waste card picked up
//! - `PlaySurface`: the move operations the controller drives

pub mod controller;
pub mod cursor;

pub use controller::{PlaySurface, SelectionController, SelectionState};
pub use cursor::Direction;
