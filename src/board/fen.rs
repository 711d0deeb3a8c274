//! Extended FEN for unions, as read by variant-chess viewers.
//!
//! Single pieces use the usual letters, uppercase for White. A union is one
//! letter from a 21 letter alphabet naming an unordered pair of types. The
//! lowercase letter gives Black the first type of the pair and White the
//! second; the uppercase letter swaps them. Unions of two equal types are
//! written uppercase.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::error::NotationError;
use super::{Color, PieceType, Position, PositionBuilder, Tile, TileState};

use PieceType::{Bishop, King, Knight, Pawn, Queen, Rook};

/// Fields after the board that this codec does not track yet.
const TRAILING_FIELDS: &str = "w 0 AHah - -";

/// Lowercase union letter, black type, white type.
const PAIR_ALPHABET: [(char, PieceType, PieceType); 21] = [
    ('a', Pawn, Pawn),
    ('c', Pawn, Rook),
    ('d', Pawn, Knight),
    ('e', Pawn, Bishop),
    ('f', Pawn, Queen),
    ('g', Pawn, King),
    ('h', Rook, Rook),
    ('i', Rook, Knight),
    ('j', Rook, Bishop),
    ('l', Rook, Queen),
    ('m', Rook, King),
    ('o', Knight, Knight),
    ('s', Knight, Bishop),
    ('t', Knight, Queen),
    ('u', Knight, King),
    ('v', Bishop, Bishop),
    ('w', Bishop, Queen),
    ('x', Bishop, King),
    ('y', Queen, Queen),
    ('z', Queen, King),
    ('_', King, King),
];

static PAIR_LOOKUP: Lazy<HashMap<char, (PieceType, PieceType)>> = Lazy::new(|| {
    PAIR_ALPHABET
        .iter()
        .map(|&(c, first, second)| (c, (first, second)))
        .collect()
});

fn pair_letter(first: PieceType, second: PieceType) -> char {
    let (first, second) = if first.index() <= second.index() {
        (first, second)
    } else {
        (second, first)
    };
    PAIR_ALPHABET
        .iter()
        .find(|&&(_, a, b)| a == first && b == second)
        .map(|&(c, _, _)| c)
        // Every sorted pair of the six types is in the table.
        .unwrap_or('_')
}

/// FEN character for what rests on a tile, `None` for an empty tile.
#[must_use]
pub fn pair_char(white: Option<PieceType>, black: Option<PieceType>) -> Option<char> {
    match (white, black) {
        (None, None) => None,
        (Some(w), None) => Some(w.to_char()),
        (None, Some(b)) => Some(b.to_char().to_ascii_lowercase()),
        (Some(w), Some(b)) => {
            let letter = pair_letter(w, b);
            if b.index() < w.index() {
                Some(letter)
            } else {
                Some(letter.to_ascii_uppercase())
            }
        }
    }
}

/// Decode one FEN board character into the tile it describes.
#[must_use]
pub fn char_pair(c: char) -> Option<TileState> {
    // Single piece letters are never part of the union alphabet.
    if let Some(piece_type) = PieceType::from_char(c) {
        return Some(if c.is_ascii_uppercase() {
            TileState::WhiteOnly(piece_type)
        } else {
            TileState::BlackOnly(piece_type)
        });
    }

    let &(first, second) = PAIR_LOOKUP.get(&c.to_ascii_lowercase())?;
    Some(if c.is_ascii_uppercase() {
        TileState::Pair(first, second)
    } else {
        TileState::Pair(second, first)
    })
}

impl Position {
    /// Parse a position from extended FEN.
    ///
    /// Only the board field is read. The hand is empty, White is to act
    /// and identities are assigned fresh.
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        let result = parse_board_field(fen);
        if result.is_err() {
            debug_log!("rejected FEN '{fen}'");
        }
        result
    }

    /// Convert the resting pieces to extended FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for y in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for x in 0..8 {
                let state = self.tile_state(Tile::new(x, y));
                match pair_char(state.white(), state.black()) {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        format!("{} {}", rows.join("/"), TRAILING_FIELDS)
    }
}

fn parse_board_field(fen: &str) -> Result<Position, NotationError> {
    let board = fen.split_whitespace().next().ok_or(NotationError::Syntax)?;

    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::Syntax);
    }

    let mut builder = PositionBuilder::new();
    for (row, rank_str) in ranks.iter().enumerate() {
        let y = 7 - row as u8;
        let mut x: u8 = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(NotationError::Syntax);
                }
                x += run as u8;
            } else {
                let state = char_pair(c).ok_or(NotationError::Syntax)?;
                if x >= 8 {
                    return Err(NotationError::Syntax);
                }
                let tile = Tile::new(x, y);
                if let Some(w) = state.white() {
                    builder = builder.piece(tile, Color::White, w);
                }
                if let Some(b) = state.black() {
                    builder = builder.piece(tile, Color::Black, b);
                }
                x += 1;
            }
            if x > 8 {
                return Err(NotationError::Syntax);
            }
        }
        if x != 8 {
            return Err(NotationError::Syntax);
        }
    }

    builder.build().map_err(|_| NotationError::Syntax)
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let position = Position::from_fen("8/8/8/8/8/8/8/8 w 0 - - -").unwrap();
        assert!(position.pieces().is_empty());
        assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/8 w 0 AHah - -");
    }

    #[test]
    fn test_pawn_union_in_corner() {
        let position = Position::from_fen("A7/8/8/8/8/8/8/8 w 0 - - -").unwrap();
        assert_eq!(position.pieces().len(), 2);
        assert_eq!(
            position.tile_state(Tile::new(0, 7)),
            TileState::Pair(Pawn, Pawn)
        );
    }

    #[test]
    fn test_initial_position() {
        let fen = Position::initial().to_fen();
        assert_eq!(
            fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 0 AHah - -"
        );
    }

    #[test]
    fn test_union_letter_case() {
        // Lowercase: black holds the first type of the pair.
        assert_eq!(char_pair('c'), Some(TileState::Pair(Rook, Pawn)));
        assert_eq!(char_pair('C'), Some(TileState::Pair(Pawn, Rook)));
        assert_eq!(pair_char(Some(Rook), Some(Pawn)), Some('c'));
        assert_eq!(pair_char(Some(Pawn), Some(Rook)), Some('C'));
        assert_eq!(pair_char(Some(Queen), Some(Queen)), Some('Y'));
        assert_eq!(pair_char(Some(King), Some(King)), Some('_'));
    }

    #[test]
    fn test_single_piece_chars() {
        assert_eq!(char_pair('p'), Some(TileState::BlackOnly(Pawn)));
        assert_eq!(char_pair('K'), Some(TileState::WhiteOnly(King)));
        assert_eq!(pair_char(Some(Knight), None), Some('N'));
        assert_eq!(pair_char(None, Some(Bishop)), Some('b'));
        assert_eq!(pair_char(None, None), None);
        assert_eq!(char_pair('9'), None);
        assert_eq!(char_pair('!'), None);
    }

    #[test]
    fn test_alphabet_covers_all_combinations() {
        let mut seen = std::collections::HashSet::new();
        for white in PieceType::ALL {
            for black in PieceType::ALL {
                let c = pair_char(Some(white), Some(black)).unwrap();
                assert_eq!(char_pair(c), Some(TileState::Pair(white, black)));
                seen.insert(c);
            }
        }
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn test_union_round_trip() {
        let position = PositionBuilder::new()
            .piece(Tile::new(3, 3), Color::White, Queen)
            .piece(Tile::new(3, 3), Color::Black, Knight)
            .piece(Tile::new(7, 0), Color::Black, King)
            .build()
            .unwrap();
        let fen = position.to_fen();
        assert!(fen.starts_with("8/8/8/8/3t4/8/8/7k "));
        let decoded = Position::from_fen(&fen).unwrap();
        assert_eq!(decoded.to_fen(), fen);
    }

    #[test]
    fn test_rejects_bad_rank_counts() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8 w 0 - - -"),
            Err(NotationError::Syntax)
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8/8 w 0 - - -"),
            Err(NotationError::Syntax)
        );
    }

    #[test]
    fn test_rejects_bad_file_counts() {
        assert_eq!(Position::from_fen("9/8/8/8/8/8/8/8"), Err(NotationError::Syntax));
        assert_eq!(Position::from_fen("7/8/8/8/8/8/8/8"), Err(NotationError::Syntax));
        assert_eq!(Position::from_fen("8p/8/8/8/8/8/8/8"), Err(NotationError::Syntax));
        assert_eq!(Position::from_fen("0pppppppp/8/8/8/8/8/8/8"), Err(NotationError::Syntax));
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert_eq!(Position::from_fen("7!/8/8/8/8/8/8/8"), Err(NotationError::Syntax));
        assert_eq!(Position::from_fen(""), Err(NotationError::Syntax));
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 0 AHah - -"
            .parse()
            .unwrap();
        assert_eq!(position.pieces().len(), 32);
        assert_eq!(position.current_player(), Color::White);
    }
}
