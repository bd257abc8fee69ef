pub mod core;

// module re-exports
pub use crate::core::definitions::{ChessPiece, Color, InvalidMoveError, InvalidMoveReason, PieceBase};
pub use crate::core::pieces::{Bishop, King, Knight, Queen, Rook};
pub use crate::core::player::Player;
pub use crate::core::position::{ParsePositionError, Position};
