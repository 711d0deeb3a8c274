use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PositionError;
use super::{Color, Hand, Identity, Piece, PieceType, Tile, TileState};

pub(crate) const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A snapshot of the game: resting pieces, lifted pieces and the player to act.
///
/// Positions are values. Actions never change a position in place; they
/// produce a new one (see [`Position::do_action`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawPosition")
)]
pub struct Position {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) lifted_pieces: Hand,
    pub(crate) current_player: Color,
}

/// Wire form of a position before its invariants are checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPosition {
    pieces: Vec<Piece>,
    lifted_pieces: Hand,
    current_player: Color,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::from_parts(raw.pieces, raw.lifted_pieces, raw.current_player)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// The standard starting layout, White to act.
    #[must_use]
    pub fn initial() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in Color::BOTH {
            let pawn_row = match color {
                Color::White => 1,
                Color::Black => 6,
            };
            for (x, &piece_type) in BACK_RANK.iter().enumerate() {
                let id = Identity::sequential(pieces.len());
                let tile = Tile::new(x as u8, color.home_row());
                pieces.push(Piece::new(piece_type, color, tile, id));
            }
            for x in 0..8 {
                let id = Identity::sequential(pieces.len());
                pieces.push(Piece::new(PieceType::Pawn, color, Tile::new(x, pawn_row), id));
            }
        }

        sort_pieces(&mut pieces);
        Position {
            pieces,
            lifted_pieces: Hand::Empty,
            current_player: Color::White,
        }
    }

    /// A board without pieces, White to act.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            pieces: Vec::new(),
            lifted_pieces: Hand::Empty,
            current_player: Color::White,
        }
    }

    /// Assemble a position from caller supplied parts, checking every
    /// structural invariant.
    pub fn from_parts(
        mut pieces: Vec<Piece>,
        lifted_pieces: Hand,
        current_player: Color,
    ) -> Result<Self, PositionError> {
        sort_pieces(&mut pieces);
        let position = Position {
            pieces,
            lifted_pieces,
            current_player,
        };
        position.validate()?;
        Ok(position)
    }

    /// Pieces resting on the board, ordered by tile with white first
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.lifted_pieces
    }

    /// Pieces currently in hand
    pub fn lifted_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.lifted_pieces.iter()
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// The same position with another player to act.
    #[must_use]
    pub fn with_current_player(mut self, color: Color) -> Self {
        self.current_player = color;
        self
    }

    /// Pieces resting on `tile` (zero, one or a union of two)
    pub fn pieces_at(&self, tile: Tile) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |piece| piece.position == tile)
    }

    #[must_use]
    pub fn tile_state(&self, tile: Tile) -> TileState {
        TileState::from_pieces(self.pieces_at(tile))
    }

    /// Check tile occupancy, hand shape and identity uniqueness.
    pub fn validate(&self) -> Result<(), PositionError> {
        let mut occupancy = [[0u8; 2]; 64];
        for piece in &self.pieces {
            let tile = piece.position;
            if !tile.is_on_board() {
                return Err(PositionError::TileOutOfBounds { tile });
            }
            let slot = &mut occupancy[tile.index() as usize];
            let color = match piece.color {
                Color::White => 0,
                Color::Black => 1,
            };
            slot[color] += 1;
            if slot[0] + slot[1] > 2 {
                return Err(PositionError::TileOverfull { tile });
            }
            if slot[color] > 1 {
                return Err(PositionError::SameColorStack { tile });
            }
        }

        if let Hand::Pair(first, second) = &self.lifted_pieces {
            if first.color == second.color {
                return Err(PositionError::HandPairNotUnion);
            }
        }

        let mut seen = HashSet::new();
        for piece in self.pieces.iter().chain(self.lifted_pieces.iter()) {
            if !seen.insert(&piece.identity) {
                return Err(PositionError::DuplicateIdentity {
                    identity: piece.identity.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Canonical order of the resting pieces. Positions that hold the same
/// pieces compare and serialize equal however they were reached.
pub(crate) fn sort_pieces(pieces: &mut [Piece]) {
    pieces.sort_by_key(|piece| {
        (
            piece.position.y(),
            piece.position.x(),
            piece.color == Color::Black,
        )
    });
}
