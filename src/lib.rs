/// Debug level logging that compiles away without the `logging` feature.
#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod board;

pub use board::{Action, Color, Piece, PieceType, Position, Tile};
