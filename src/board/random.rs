//! Random positions, for searching the space of setups for puzzles.

use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand::Rng;

use super::state::{sort_pieces, BACK_RANK};
use super::{Color, Hand, Identity, Piece, PieceType, Position, Tile};

/// Scatters a full set of pieces per color over the board, White to act.
///
/// Pieces of one color take distinct tiles, so unions appear wherever the
/// two colors meet. Pawns never land on the first or last row.
impl Distribution<Position> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let mut pieces = Vec::with_capacity(32);
        for color in Color::BOTH {
            let mut tiles: Vec<Tile> = Tile::all().collect();
            tiles.shuffle(rng);

            let mut pawns = 0;
            let mut officers = BACK_RANK.iter();
            for tile in tiles {
                let piece_type = if pawns < 8 && (1..7).contains(&tile.y()) {
                    pawns += 1;
                    PieceType::Pawn
                } else if let Some(&piece_type) = officers.next() {
                    piece_type
                } else {
                    continue;
                };
                let id = Identity::sequential(pieces.len());
                pieces.push(Piece::new(piece_type, color, tile, id));
            }
        }
        sort_pieces(&mut pieces);

        Position {
            pieces,
            lifted_pieces: Hand::Empty,
            current_player: Color::White,
        }
    }
}
