//! Core value types.
//!
//! - `Tile` - board coordinate with a flat index form
//! - `PieceType`, `Color`, `Identity` and `Piece`
//! - `Hand` - the 0-2 lifted pieces
//! - `Action` - lift, place and promote
//! - `TileState` - per-tile summary used by the notation codecs

mod action;
mod hand;
mod piece;
mod tile;
mod tile_state;

pub use action::Action;
pub use hand::Hand;
pub use piece::{Color, Identity, Piece, PieceType};
pub use tile::Tile;
pub use tile_state::TileState;
