use std::fmt::{self, Debug, Display};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::position::Position;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    #[default]
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /** Destination is not reachable with the piece's movement rule */
    OutOfPattern,
    /** Piece was captured, captured pieces can't move */
    CapturedPiece,
}

/// Returned by [`ChessPiece::move_to`]. The piece is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidMoveError {
    pub piece: &'static str,
    pub from: Position,
    pub to: Position,
    pub reason: InvalidMoveReason,
}

impl Display for InvalidMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidMoveReason::OutOfPattern => write!(
                f,
                "invalid move: {} can't go from {} to {}",
                self.piece, self.from, self.to
            ),
            InvalidMoveReason::CapturedPiece => write!(
                f,
                "invalid move: captured {} at {} can't move to {}",
                self.piece, self.from, self.to
            ),
        }
    }
}

impl std::error::Error for InvalidMoveError {}

/// Capabilities every piece variant provides.
///
/// `Display` is required so that a `dyn ChessPiece` always prints the
/// description of the concrete variant behind it.
pub trait ChessPiece: Display + Debug {
    /// Relocates the piece if `destination` fits its movement rule.
    fn move_to(&mut self, destination: Position) -> Result<(), InvalidMoveError>;

    /// Short name of the variant, e.g. `Rook`.
    fn name(&self) -> &'static str;

    fn base(&self) -> &PieceBase;

    fn base_mut(&mut self) -> &mut PieceBase;

    fn is_alive(&self) -> bool {
        self.base().is_alive()
    }

    fn set_alive(&mut self, alive: bool) {
        self.base_mut().set_alive(alive)
    }

    fn position(&self) -> Position {
        self.base().position()
    }

    fn weight(&self) -> f64 {
        self.base().weight()
    }
}

/** State shared by all piece variants.
 * Position can only be changed through `commit_move`, which is not
 * reachable from outside of the crate. */
#[derive(Clone, Debug, PartialEq)]
pub struct PieceBase {
    weight: f64,
    alive: bool,
    position: Position,
}

impl PieceBase {
    pub fn new(start: Position, weight: f64) -> Self {
        PieceBase {
            weight,
            alive: true,
            position: start,
        }
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /** Checks `rule(current, destination)` and moves on success. */
    pub(crate) fn commit_move<F>(
        &mut self,
        piece: &'static str,
        destination: Position,
        rule: F,
    ) -> Result<(), InvalidMoveError>
    where
        F: FnOnce(Position, Position) -> bool,
    {
        let reason = if !self.alive {
            Some(InvalidMoveReason::CapturedPiece)
        } else if !rule(self.position, destination) {
            Some(InvalidMoveReason::OutOfPattern)
        } else {
            None
        };
        if let Some(reason) = reason {
            let error = InvalidMoveError {
                piece,
                from: self.position,
                to: destination,
                reason,
            };
            debug!("Rejected move: {error}");
            return Err(error);
        }
        trace!("{piece} moves {} -> {destination}", self.position);
        self.position = destination;
        Ok(())
    }
}

impl Display for PieceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I am a chess piece with value {}", self.weight)
    }
}
