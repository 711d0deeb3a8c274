#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Who may lift pieces from a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiftPolicy {
    /// Any occupied or empty tile may be lifted from (board editor).
    #[default]
    Unrestricted,
    /// The current player must own a piece on the tile (strict play).
    CurrentPlayerOnly,
}

/// Caller chosen rules applied on top of the structural checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ActionPolicy {
    pub lift: LiftPolicy,
}

impl ActionPolicy {
    /// Policy for a game between two players.
    #[must_use]
    pub const fn strict() -> Self {
        ActionPolicy {
            lift: LiftPolicy::CurrentPlayerOnly,
        }
    }
}
