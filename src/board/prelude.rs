//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use paco_sako::board::prelude::*;
//!
//! let position = Position::initial();
//! assert!(position.do_action(Action::Place(Tile::new(0, 0))).is_err());
//! ```

pub use super::{
    replay, Action, ActionError, ActionPolicy, Color, Hand, LiftPolicy, NotationError, Piece,
    PieceType, Position, PositionBuilder, Tile, TileState,
};
