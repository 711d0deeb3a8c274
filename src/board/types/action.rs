//! Atomic actions a player can request.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PieceType, Tile};

/// One atomic step of a move.
///
/// A full move is a `Lift` followed by one or more `Place` actions, since
/// landing on a union continues the chain. On the wire the tile is carried
/// as its flat index: `{"Lift": 12}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Lift(
        #[cfg_attr(feature = "serde", serde(with = "crate::board::types::tile::flat_index"))]
        Tile,
    ),
    Place(
        #[cfg_attr(feature = "serde", serde(with = "crate::board::types::tile::flat_index"))]
        Tile,
    ),
    Promote(PieceType),
}

impl Action {
    /// The tile this action targets, if any
    #[must_use]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Action::Lift(tile) | Action::Place(tile) => Some(tile),
            Action::Promote(_) => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Lift(tile) => write!(f, "lift {tile}"),
            Action::Place(tile) => write!(f, "place {tile}"),
            Action::Promote(piece_type) => write!(f, "promote {piece_type}"),
        }
    }
}
