//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing notation.
//! Every piece gets a fresh sequential identity in the order it was added.
//!
//! # Example
//! ```
//! use paco_sako::board::{Color, PieceType, PositionBuilder, Tile};
//!
//! let position = PositionBuilder::new()
//!     .piece(Tile::new(4, 0), Color::White, PieceType::King)
//!     .piece(Tile::new(4, 7), Color::Black, PieceType::King)
//!     .piece(Tile::new(3, 3), Color::White, PieceType::Pawn)
//!     .piece(Tile::new(3, 3), Color::Black, PieceType::Knight)
//!     .current_player(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.pieces().len(), 4);
//! ```

use super::error::PositionError;
use super::{Color, Hand, Identity, Piece, PieceType, Position, Tile};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Tile, Color, PieceType)>,
    current_player: Color,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder, White to act.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            current_player: Color::White,
        }
    }

    /// Put a piece on a tile.
    ///
    /// A piece of the same color already on that tile is replaced, so the
    /// builder can only produce a union of opposite colors.
    #[must_use]
    pub fn piece(mut self, tile: Tile, color: Color, piece_type: PieceType) -> Self {
        self.pieces.retain(|&(t, c, _)| !(t == tile && c == color));
        self.pieces.push((tile, color, piece_type));
        self
    }

    /// Remove every piece from a tile.
    #[must_use]
    pub fn clear(mut self, tile: Tile) -> Self {
        self.pieces.retain(|&(t, _, _)| t != tile);
        self
    }

    /// Set the player to act.
    #[must_use]
    pub const fn current_player(mut self, color: Color) -> Self {
        self.current_player = color;
        self
    }

    /// Build the position with an empty hand.
    pub fn build(self) -> Result<Position, PositionError> {
        let pieces = self
            .pieces
            .into_iter()
            .enumerate()
            .map(|(n, (tile, color, piece_type))| {
                Piece::new(piece_type, color, tile, Identity::sequential(n))
            })
            .collect();
        Position::from_parts(pieces, Hand::Empty, self.current_player)
    }
}
