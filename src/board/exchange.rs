//! Exchange notation: a plain text 8x8 grid for sharing positions.
//!
//! ```text
//! R. N. B. Q. K. B. N. R.
//! ```
//! is the white back rank. Every cell holds the white piece letter and the
//! black piece letter, `.` standing for no piece. The top row is rank 8.
//! A library is a list of grids separated by lines holding only `-`.

use std::fmt;

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use super::error::NotationError;
use super::{Color, PieceType, Position, PositionBuilder, Tile, TileState};

#[derive(Parser)]
#[grammar = "board/exchange.pest"]
struct ExchangeParser;

const EMPTY_CELL: char = '.';

impl Position {
    /// Render the resting pieces as an exchange notation grid.
    #[must_use]
    pub fn to_exchange_notation(&self) -> String {
        let rows: Vec<String> = (0..8)
            .rev()
            .map(|y| {
                let cells: Vec<String> = (0..8)
                    .map(|x| cell_text(self.tile_state(Tile::new(x, y))))
                    .collect();
                cells.join(" ")
            })
            .collect();
        rows.join("\n")
    }

    /// Parse one exchange notation grid.
    ///
    /// The hand is empty, White is to act and identities are assigned fresh.
    pub fn from_exchange_notation(text: &str) -> Result<Self, NotationError> {
        let mut grids = parse_grids(Rule::board, text)?;
        match (grids.next(), grids.next()) {
            (Some(grid), None) => position_from_grid(grid),
            _ => Err(NotationError::Syntax),
        }
    }
}

/// Shows the exchange notation grid.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_exchange_notation())
    }
}

/// Parse a library of grids separated by `-` lines.
///
/// Fails as a whole if any grid is malformed.
pub fn parse_library(text: &str) -> Result<Vec<Position>, NotationError> {
    parse_grids(Rule::library, text)?
        .map(position_from_grid)
        .collect()
}

/// Write positions as a library, the inverse of [`parse_library`].
#[must_use]
pub fn write_library(positions: &[Position]) -> String {
    let grids: Vec<String> = positions
        .iter()
        .map(Position::to_exchange_notation)
        .collect();
    grids.join("\n-\n")
}

/// Run the grammar from `entry` and return the grids below it.
fn parse_grids(
    entry: Rule,
    text: &str,
) -> Result<impl Iterator<Item = Pair<'_, Rule>>, NotationError> {
    let top = ExchangeParser::parse(entry, text)
        .map_err(syntax_error)?
        .next()
        .ok_or(NotationError::Syntax)?;
    Ok(top.into_inner().filter(|pair| pair.as_rule() == Rule::grid))
}

fn syntax_error(err: pest::error::Error<Rule>) -> NotationError {
    debug_log!("exchange notation rejected: {err}");
    NotationError::Syntax
}

fn cell_text(state: TileState) -> String {
    let letter =
        |piece_type: Option<PieceType>| piece_type.map_or(EMPTY_CELL, PieceType::to_char);
    [letter(state.white()), letter(state.black())].iter().collect()
}

fn cell_state(cell: Pair<'_, Rule>) -> TileState {
    let mut chars = cell.as_str().chars();
    let white = chars.next().and_then(PieceType::from_char);
    let black = chars.next().and_then(PieceType::from_char);
    TileState::from_parts(white, black)
}

fn position_from_grid(grid: Pair<'_, Rule>) -> Result<Position, NotationError> {
    let rows: Vec<Vec<TileState>> = grid
        .into_inner()
        .map(|row| row.into_inner().map(cell_state).collect())
        .collect();

    if rows.len() != 8 || rows.iter().any(|row| row.len() != 8) {
        debug_log!("exchange notation grid is not 8x8");
        return Err(NotationError::Syntax);
    }

    let mut builder = PositionBuilder::new();
    for (row_index, row) in rows.iter().enumerate() {
        let y = 7 - row_index as u8;
        for (x, state) in row.iter().enumerate() {
            let tile = Tile::new(x as u8, y);
            for color in Color::BOTH {
                if let Some(piece_type) = state.get(color) {
                    builder = builder.piece(tile, color, piece_type);
                }
            }
        }
    }

    builder.build().map_err(|_| NotationError::Syntax)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL: &str = "\
.R .N .B .Q .K .B .N .R
.P .P .P .P .P .P .P .P
.. .. .. .. .. .. .. ..
.. .. .. .. .. .. .. ..
.. .. .. .. .. .. .. ..
.. .. .. .. .. .. .. ..
P. P. P. P. P. P. P. P.
R. N. B. Q. K. B. N. R.";

    #[test]
    fn test_export_initial() {
        let text = Position::initial().to_exchange_notation();
        assert_eq!(text, INITIAL);
        assert_eq!(text.lines().nth(6), Some("P. P. P. P. P. P. P. P."));
    }

    #[test]
    fn test_display_is_exchange_notation() {
        assert_eq!(Position::initial().to_string(), INITIAL);
    }

    #[test]
    fn test_import_initial() {
        let position = Position::from_exchange_notation(INITIAL).unwrap();
        assert_eq!(position.pieces().len(), 32);
        for x in 0..8 {
            assert_eq!(
                position.tile_state(Tile::new(x, 1)),
                TileState::WhiteOnly(PieceType::Pawn)
            );
        }
        assert_eq!(
            position.tile_state(Tile::new(4, 7)),
            TileState::BlackOnly(PieceType::King)
        );
    }

    #[test]
    fn test_import_pair_cell() {
        let mut lines: Vec<String> = vec![".. .. .. .. .. .. .. ..".to_string(); 8];
        lines[4] = ".. .. .. QN .. .. .. ..".to_string();
        let position = Position::from_exchange_notation(&lines.join("\n")).unwrap();
        assert_eq!(
            position.tile_state(Tile::new(3, 3)),
            TileState::Pair(PieceType::Queen, PieceType::Knight)
        );
        assert_eq!(position.pieces().len(), 2);
    }

    #[test]
    fn test_trailing_newline_is_accepted() {
        let text = format!("{INITIAL}\n");
        assert!(Position::from_exchange_notation(&text).is_ok());
    }

    #[test]
    fn test_short_row_fails() {
        let text = INITIAL.replacen("P. P. P. P. P. P. P. P.", "P. P. P. P. P. P. P.", 1);
        assert_eq!(
            Position::from_exchange_notation(&text),
            Err(NotationError::Syntax)
        );
    }

    #[test]
    fn test_long_row_fails() {
        let text = INITIAL.replacen("P. P. P. P. P. P. P. P.", "P. P. P. P. P. P. P. P. ..", 1);
        assert_eq!(
            Position::from_exchange_notation(&text),
            Err(NotationError::Syntax)
        );
    }

    #[test]
    fn test_wrong_row_count_fails() {
        let seven: Vec<&str> = INITIAL.lines().take(7).collect();
        assert_eq!(
            Position::from_exchange_notation(&seven.join("\n")),
            Err(NotationError::Syntax)
        );
        let nine = format!("{INITIAL}\n.. .. .. .. .. .. .. ..");
        assert_eq!(
            Position::from_exchange_notation(&nine),
            Err(NotationError::Syntax)
        );
    }

    #[test]
    fn test_bad_characters_fail() {
        let text = INITIAL.replacen("K.", "X.", 1);
        assert_eq!(
            Position::from_exchange_notation(&text),
            Err(NotationError::Syntax)
        );
        let lowercase = INITIAL.replacen("K.", "k.", 1);
        assert!(Position::from_exchange_notation(&lowercase).is_err());
    }

    #[test]
    fn test_library_round_trip() {
        let positions = vec![Position::initial(), Position::empty()];
        let text = write_library(&positions);
        let parsed = parse_library(&text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].to_exchange_notation(), INITIAL);
        assert!(parsed[1].pieces().is_empty());
    }

    #[test]
    fn test_library_fails_as_a_whole() {
        let broken = format!("{INITIAL}\n-\n.. ..");
        assert_eq!(parse_library(&broken), Err(NotationError::Syntax));
    }

    #[test]
    fn test_single_grid_rejects_library() {
        let text = write_library(&[Position::initial(), Position::initial()]);
        assert!(Position::from_exchange_notation(&text).is_err());
    }
}
