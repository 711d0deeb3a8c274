//! Error types for position, action and notation handling.

use std::fmt;

use super::{Identity, Tile};

/// Error type for rejected actions.
///
/// A rejected action is expected input: the position it was applied to is
/// left untouched and the caller simply keeps showing the old state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action names a tile outside the 8x8 board
    TileOffBoard { tile: Tile },
    /// A lift is already in progress (the hand is not empty)
    LiftWithFullHand,
    /// The lift policy requires the current player to own a piece on the tile
    LiftNotOwned { tile: Tile },
    /// Nothing is lifted, so there is nothing to place
    PlaceWithEmptyHand,
    /// The target tile already holds a single piece of the placed color
    PlaceOnSameColor { tile: Tile },
    /// A lifted union can only be placed on an empty tile
    PlacePairOnOccupied { tile: Tile },
    /// No pawn of the current player stands on the promotion row
    NoPromotionCandidate,
    /// More than one pawn of the current player stands on the promotion row
    AmbiguousPromotion { candidates: usize },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::TileOffBoard { tile } => {
                write!(f, "Tile ({}, {}) is off the board", tile.x(), tile.y())
            }
            ActionError::LiftWithFullHand => write!(f, "Cannot lift while holding pieces"),
            ActionError::LiftNotOwned { tile } => {
                write!(f, "Current player owns no piece on {tile}")
            }
            ActionError::PlaceWithEmptyHand => write!(f, "Cannot place with an empty hand"),
            ActionError::PlaceOnSameColor { tile } => {
                write!(f, "Cannot place onto a piece of the same color on {tile}")
            }
            ActionError::PlacePairOnOccupied { tile } => {
                write!(f, "Cannot place a union onto occupied tile {tile}")
            }
            ActionError::NoPromotionCandidate => write!(f, "No pawn is ready to promote"),
            ActionError::AmbiguousPromotion { candidates } => {
                write!(f, "Promotion is ambiguous, {candidates} pawns are eligible")
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// Error type for grid and FEN notation parsing failures.
///
/// Parsing never partially succeeds and no location is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationError {
    /// The input does not match the notation grammar
    Syntax,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Syntax => write!(f, "Syntax error in board notation"),
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for positions that break a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A piece stands outside the 8x8 board
    TileOutOfBounds { tile: Tile },
    /// More than two pieces rest on one tile
    TileOverfull { tile: Tile },
    /// Two pieces of the same color rest on one tile
    SameColorStack { tile: Tile },
    /// Two pieces share an identity
    DuplicateIdentity { identity: Identity },
    /// More than two pieces are lifted
    HandTooLarge { count: usize },
    /// Two lifted pieces that do not form a union
    HandPairNotUnion,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TileOutOfBounds { tile } => {
                write!(f, "Piece on ({}, {}) is off the board", tile.x(), tile.y())
            }
            PositionError::TileOverfull { tile } => {
                write!(f, "More than two pieces on {tile}")
            }
            PositionError::SameColorStack { tile } => {
                write!(f, "Two pieces of the same color on {tile}")
            }
            PositionError::DuplicateIdentity { identity } => {
                write!(f, "Identity '{identity}' is used more than once")
            }
            PositionError::HandTooLarge { count } => {
                write!(f, "At most two pieces can be lifted, found {count}")
            }
            PositionError::HandPairNotUnion => {
                write!(f, "Two lifted pieces must be of different colors")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for tile parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// Coordinates outside the 8x8 board
    OutOfBounds { x: u8, y: u8 },
    /// Invalid identifier such as "z9"
    InvalidNotation { notation: String },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::OutOfBounds { x, y } => {
                write!(f, "Tile ({x}, {y}) out of bounds (must be 0-7)")
            }
            TileError::InvalidNotation { notation } => {
                write!(f, "Invalid tile notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for TileError {}

/// Error type for replaying an action history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayError {
    /// Position of the rejected action in the history
    pub index: usize,
    pub error: ActionError,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action {} was rejected: {}", self.index, self.error)
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
