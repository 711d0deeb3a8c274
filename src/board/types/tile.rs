//! Tile coordinates and the flat board index.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::TileError;

const FILE_CHARS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANK_CHARS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// A tile on the board, represented as (file, rank).
///
/// Both components are expected to be in 0-7. `Tile::new` does not check
/// this; callers that take coordinates from outside use `TryFrom` or
/// `FromStr` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    x: u8,
    y: u8,
}

impl Tile {
    /// Create a tile from file (x) and rank (y)
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Tile { x, y }
    }

    /// Create a tile from a flat index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Tile {
            x: index % 8,
            y: index / 8,
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Whether both components are in 0-7
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x < 8 && self.y < 8
    }

    /// Get the flat index `x + 8 * y`.
    ///
    /// Only meaningful for tiles on the board; other tiles wrap.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.y.wrapping_mul(8).wrapping_add(self.x)
    }

    /// All 64 tiles in index order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..64).map(Tile::from_index)
    }

    /// Human readable identifier like "g4".
    ///
    /// Out of range components render as '?' instead of failing.
    #[must_use]
    pub fn identifier(self) -> String {
        let file = FILE_CHARS.get(self.x as usize).copied().unwrap_or('?');
        let rank = RANK_CHARS.get(self.y as usize).copied().unwrap_or('?');
        format!("{file}{rank}")
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = TileError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        let tile = Tile::new(x, y);
        if !tile.is_on_board() {
            return Err(TileError::OutOfBounds { x, y });
        }
        Ok(tile)
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TileError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let x = FILE_CHARS
            .iter()
            .position(|&c| c == chars[0])
            .ok_or_else(invalid)?;
        let y = RANK_CHARS
            .iter()
            .position(|&c| c == chars[1])
            .ok_or_else(invalid)?;

        Ok(Tile::new(x as u8, y as u8))
    }
}

/// Serializes a tile as its flat index, as actions carry it on the wire.
#[cfg(feature = "serde")]
pub(crate) mod flat_index {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    use super::Tile;

    pub(crate) fn serialize<S: Serializer>(tile: &Tile, serializer: S) -> Result<S::Ok, S::Error> {
        if !tile.is_on_board() {
            return Err(ser::Error::custom(format!(
                "tile ({}, {}) is off the board",
                tile.x(),
                tile.y()
            )));
        }
        serializer.serialize_u8(tile.index())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Tile, D::Error>
    where
        D: Deserializer<'de>,
    {
        let index = u8::deserialize(deserializer)?;
        if index >= 64 {
            return Err(de::Error::custom(format!(
                "tile index {index} out of bounds (must be 0-63)"
            )));
        }
        Ok(Tile::from_index(index))
    }
}
