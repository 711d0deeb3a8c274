use super::{Color, Piece, PieceType};

/// What rests on a single tile, ignoring identities.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileState {
    Empty,
    WhiteOnly(PieceType),
    BlackOnly(PieceType),
    /// A union, white type first
    Pair(PieceType, PieceType),
}

impl TileState {
    #[must_use]
    pub const fn from_parts(white: Option<PieceType>, black: Option<PieceType>) -> Self {
        match (white, black) {
            (None, None) => TileState::Empty,
            (Some(w), None) => TileState::WhiteOnly(w),
            (None, Some(b)) => TileState::BlackOnly(b),
            (Some(w), Some(b)) => TileState::Pair(w, b),
        }
    }

    /// Summarize the pieces resting on one tile.
    ///
    /// Pieces are expected to satisfy the one-per-color rule; a later piece
    /// of the same color overrides an earlier one.
    pub fn from_pieces<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Self {
        let mut white = None;
        let mut black = None;
        for piece in pieces {
            match piece.color {
                Color::White => white = Some(piece.piece_type),
                Color::Black => black = Some(piece.piece_type),
            }
        }
        TileState::from_parts(white, black)
    }

    #[must_use]
    pub const fn white(self) -> Option<PieceType> {
        match self {
            TileState::WhiteOnly(w) | TileState::Pair(w, _) => Some(w),
            TileState::Empty | TileState::BlackOnly(_) => None,
        }
    }

    #[must_use]
    pub const fn black(self) -> Option<PieceType> {
        match self {
            TileState::BlackOnly(b) | TileState::Pair(_, b) => Some(b),
            TileState::Empty | TileState::WhiteOnly(_) => None,
        }
    }

    #[must_use]
    pub const fn get(self, color: Color) -> Option<PieceType> {
        match color {
            Color::White => self.white(),
            Color::Black => self.black(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, TileState::Empty)
    }
}
