//! Undo/redo history.
//!
//! ## Key Types
//!
//! - `GameSnapshot`: an independent copy of `GameState`
//! - `History`: undo and redo stacks of snapshots

pub mod manager;
pub mod snapshot;

pub use manager::History;
pub use snapshot::GameSnapshot;
