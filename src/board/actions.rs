use super::error::ActionError;
use super::policy::{ActionPolicy, LiftPolicy};
use super::state::sort_pieces;
use super::{Action, Hand, Piece, PieceType, Position, Tile, TileState};

impl Position {
    /// Apply one action under the default (unrestricted) policy.
    ///
    /// Returns the resulting position or the reason the action was rejected.
    /// `self` is never modified.
    ///
    /// # Example
    /// ```
    /// use paco_sako::board::{Action, Position, Tile};
    ///
    /// let position = Position::initial();
    /// let lifted = position.do_action(Action::Lift(Tile::new(4, 1))).unwrap();
    /// let moved = lifted.do_action(Action::Place(Tile::new(4, 3))).unwrap();
    /// assert!(moved.hand().is_empty());
    /// ```
    pub fn do_action(&self, action: Action) -> Result<Position, ActionError> {
        self.do_action_with(action, &ActionPolicy::default())
    }

    /// Apply one action under an explicit policy.
    pub fn do_action_with(
        &self,
        action: Action,
        policy: &ActionPolicy,
    ) -> Result<Position, ActionError> {
        let result = match action {
            Action::Lift(tile) | Action::Place(tile) if !tile.is_on_board() => {
                Err(ActionError::TileOffBoard { tile })
            }
            Action::Lift(tile) => self.lift(tile, policy.lift),
            Action::Place(tile) => self.place(tile),
            Action::Promote(piece_type) => self.promote(piece_type),
        };
        if let Err(ref err) = result {
            debug_log!("rejected {action} for {}: {err}", self.current_player);
        }
        result
    }

    fn lift(&self, tile: Tile, policy: LiftPolicy) -> Result<Position, ActionError> {
        if !self.lifted_pieces.is_empty() {
            return Err(ActionError::LiftWithFullHand);
        }
        if policy == LiftPolicy::CurrentPlayerOnly
            && self.tile_state(tile).get(self.current_player).is_none()
        {
            return Err(ActionError::LiftNotOwned { tile });
        }

        let (lifted, pieces): (Vec<Piece>, Vec<Piece>) = self
            .pieces
            .iter()
            .cloned()
            .partition(|piece| piece.position == tile);

        let mut lifted = lifted.into_iter();
        let hand = match (lifted.next(), lifted.next()) {
            (None, _) => Hand::Empty,
            (Some(piece), None) => Hand::Single(piece),
            (Some(first), Some(second)) => Hand::Pair(first, second),
        };

        Ok(Position {
            pieces,
            lifted_pieces: hand,
            current_player: self.current_player,
        })
    }

    fn place(&self, tile: Tile) -> Result<Position, ActionError> {
        match &self.lifted_pieces {
            Hand::Empty => Err(ActionError::PlaceWithEmptyHand),
            Hand::Single(piece) => self.place_single(piece, tile),
            Hand::Pair(first, second) => self.place_pair(first, second, tile),
        }
    }

    /// Put one held piece down. Landing on a union swaps the placed piece
    /// for the union member of the same color, which continues the chain.
    fn place_single(&self, piece: &Piece, tile: Tile) -> Result<Position, ActionError> {
        let chain = match self.tile_state(tile) {
            TileState::Empty => false,
            TileState::Pair(..) => true,
            single => {
                if single.get(piece.color).is_some() {
                    return Err(ActionError::PlaceOnSameColor { tile });
                }
                false
            }
        };

        let mut pieces = Vec::with_capacity(self.pieces.len() + 1);
        let mut hand = Hand::Empty;
        for resting in &self.pieces {
            if chain && resting.position == tile && resting.color == piece.color {
                hand = Hand::Single(resting.clone());
            } else {
                pieces.push(resting.clone());
            }
        }
        pieces.push(landed(piece, tile));
        sort_pieces(&mut pieces);

        Ok(Position {
            pieces,
            lifted_pieces: hand,
            current_player: self.current_player,
        })
    }

    fn place_pair(
        &self,
        first: &Piece,
        second: &Piece,
        tile: Tile,
    ) -> Result<Position, ActionError> {
        if !self.tile_state(tile).is_empty() {
            return Err(ActionError::PlacePairOnOccupied { tile });
        }

        let mut pieces = Vec::with_capacity(self.pieces.len() + 2);
        pieces.extend(self.pieces.iter().cloned());
        pieces.push(landed(first, tile));
        pieces.push(landed(second, tile));
        sort_pieces(&mut pieces);

        Ok(Position {
            pieces,
            lifted_pieces: Hand::Empty,
            current_player: self.current_player,
        })
    }

    /// Promote the single pawn of the current player standing on the
    /// opponent's home row.
    fn promote(&self, piece_type: PieceType) -> Result<Position, ActionError> {
        let row = self.current_player.promotion_row();
        let candidates: Vec<usize> = self
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| {
                piece.color == self.current_player
                    && piece.piece_type == PieceType::Pawn
                    && piece.position.y() == row
            })
            .map(|(index, _)| index)
            .collect();

        match candidates.as_slice() {
            [] => Err(ActionError::NoPromotionCandidate),
            &[index] => {
                let mut pieces = self.pieces.clone();
                pieces[index].piece_type = piece_type;
                Ok(Position {
                    pieces,
                    lifted_pieces: self.lifted_pieces.clone(),
                    current_player: self.current_player,
                })
            }
            many => Err(ActionError::AmbiguousPromotion {
                candidates: many.len(),
            }),
        }
    }
}

fn landed(piece: &Piece, tile: Tile) -> Piece {
    Piece {
        position: tile,
        ..piece.clone()
    }
}
