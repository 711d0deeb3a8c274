//! Paco Ŝako board state and its notations.
//!
//! A [`Position`] holds the resting pieces, the lifted pieces and the player
//! to act. It only changes through [`Position::do_action`], which returns a
//! new position for every accepted [`Action`]. Positions can be exchanged
//! as a text grid ([`Position::to_exchange_notation`]), as extended FEN
//! ([`Position::to_fen`]) or, with the `serde` feature, as JSON.
//!
//! # Example
//! ```
//! use paco_sako::board::{Action, Position, Tile, TileState, PieceType};
//!
//! let mut position = Position::initial();
//! for action in [
//!     Action::Lift(Tile::new(4, 1)),
//!     Action::Place(Tile::new(4, 3)),
//!     Action::Lift(Tile::new(3, 6)),
//!     Action::Place(Tile::new(3, 4)),
//!     Action::Lift(Tile::new(4, 3)),
//!     Action::Place(Tile::new(3, 4)),
//! ] {
//!     position = position.do_action(action).unwrap();
//! }
//! assert_eq!(
//!     position.tile_state(Tile::new(3, 4)),
//!     TileState::Pair(PieceType::Pawn, PieceType::Pawn)
//! );
//! ```

mod actions;
mod builder;
mod error;
mod exchange;
mod fen;
mod history;
mod policy;
pub mod prelude;
#[cfg(feature = "rand")]
mod random;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{ActionError, NotationError, PositionError, ReplayError, TileError};
pub use exchange::{parse_library, write_library};
pub use fen::{char_pair, pair_char};
pub use history::replay;
pub use policy::{ActionPolicy, LiftPolicy};
pub use state::Position;
pub use types::{Action, Color, Hand, Identity, Piece, PieceType, Tile, TileState};
