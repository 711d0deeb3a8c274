//! Pieces held between a lift and the place that ends the move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece};
use crate::board::error::PositionError;

/// Lifted pieces.
///
/// At most one lift is in progress at a time. A single piece is either a
/// piece lifted on its own or the piece picked back up in a chain; a pair
/// is a union lifted from its tile and carried together.
///
/// Serialized as a list of 0-2 pieces.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Piece>", into = "Vec<Piece>")
)]
pub enum Hand {
    #[default]
    Empty,
    Single(Piece),
    Pair(Piece, Piece),
}

impl Hand {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Hand::Empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Hand::Empty => 0,
            Hand::Single(_) => 1,
            Hand::Pair(..) => 2,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        let (first, second) = match self {
            Hand::Empty => (None, None),
            Hand::Single(piece) => (Some(piece), None),
            Hand::Pair(first, second) => (Some(first), Some(second)),
        };
        first.into_iter().chain(second)
    }

    /// Whether any lifted piece belongs to `color`
    #[must_use]
    pub fn holds(&self, color: Color) -> bool {
        self.iter().any(|piece| piece.color == color)
    }
}

impl TryFrom<Vec<Piece>> for Hand {
    type Error = PositionError;

    fn try_from(mut pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        match pieces.len() {
            0 => Ok(Hand::Empty),
            1 => Ok(Hand::Single(pieces.remove(0))),
            2 => {
                let second = pieces.remove(1);
                let first = pieces.remove(0);
                if first.color == second.color {
                    return Err(PositionError::HandPairNotUnion);
                }
                Ok(Hand::Pair(first, second))
            }
            count => Err(PositionError::HandTooLarge { count }),
        }
    }
}

impl From<Hand> for Vec<Piece> {
    fn from(hand: Hand) -> Self {
        match hand {
            Hand::Empty => Vec::new(),
            Hand::Single(piece) => vec![piece],
            Hand::Pair(first, second) => vec![first, second],
        }
    }
}
