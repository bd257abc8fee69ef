//! Concrete piece variants.
//!
//! Every variant owns a [`PieceBase`] and only adds its weight constant and
//! movement rule. Moves are validated against the piece alone, other pieces
//! on the board are not taken into account.

use std::fmt::{self, Display};

use crate::core::definitions::{ChessPiece, InvalidMoveError, PieceBase};
use crate::core::position::Position;
use crate::core::utils::{chebyshev_distance, distance, is_in_diagonal_line, is_in_straight_line};

pub const ROOK_WEIGHT: f64 = 4.9;
pub const BISHOP_WEIGHT: f64 = 3.3;
pub const KNIGHT_WEIGHT: f64 = 3.2;
pub const QUEEN_WEIGHT: f64 = 9.5;
// King can't be traded for anything.
pub const KING_WEIGHT: f64 = f64::INFINITY;

fn rook_rule(from: Position, to: Position) -> bool {
    is_in_straight_line(from, to)
}

fn bishop_rule(from: Position, to: Position) -> bool {
    is_in_diagonal_line(from, to)
}

fn queen_rule(from: Position, to: Position) -> bool {
    is_in_straight_line(from, to) || is_in_diagonal_line(from, to)
}

fn knight_rule(from: Position, to: Position) -> bool {
    distance(from, to) == 3 && from.file() != to.file() && from.rank() != to.rank()
}

fn king_rule(from: Position, to: Position) -> bool {
    chebyshev_distance(from, to) == 1
}

/// Moves along its current file or rank.
#[derive(Clone, Debug, PartialEq)]
pub struct Rook {
    base: PieceBase,
}

impl Rook {
    pub fn new(start: Position) -> Self {
        Rook {
            base: PieceBase::new(start, ROOK_WEIGHT),
        }
    }
}

impl ChessPiece for Rook {
    fn move_to(&mut self, destination: Position) -> Result<(), InvalidMoveError> {
        let name = self.name();
        self.base.commit_move(name, destination, rook_rule)
    }

    fn name(&self) -> &'static str {
        "Rook"
    }

    fn base(&self) -> &PieceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PieceBase {
        &mut self.base
    }
}

impl Display for Rook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nMy name is {}", self.base, self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bishop {
    base: PieceBase,
}

impl Bishop {
    pub fn new(start: Position) -> Self {
        Bishop {
            base: PieceBase::new(start, BISHOP_WEIGHT),
        }
    }
}

impl ChessPiece for Bishop {
    fn move_to(&mut self, destination: Position) -> Result<(), InvalidMoveError> {
        let name = self.name();
        self.base.commit_move(name, destination, bishop_rule)
    }

    fn name(&self) -> &'static str {
        "Bishop"
    }

    fn base(&self) -> &PieceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PieceBase {
        &mut self.base
    }
}

impl Display for Bishop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nMy name is {}", self.base, self.name())
    }
}

/// Rook and bishop combined.
#[derive(Clone, Debug, PartialEq)]
pub struct Queen {
    base: PieceBase,
}

impl Queen {
    pub fn new(start: Position) -> Self {
        Queen {
            base: PieceBase::new(start, QUEEN_WEIGHT),
        }
    }
}

impl ChessPiece for Queen {
    fn move_to(&mut self, destination: Position) -> Result<(), InvalidMoveError> {
        let name = self.name();
        self.base.commit_move(name, destination, queen_rule)
    }

    fn name(&self) -> &'static str {
        "Queen"
    }

    fn base(&self) -> &PieceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PieceBase {
        &mut self.base
    }
}

impl Display for Queen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nMy name is {}", self.base, self.name())
    }
}

/// Jumps two squares on one axis and one on the other.
#[derive(Clone, Debug, PartialEq)]
pub struct Knight {
    base: PieceBase,
}

impl Knight {
    pub fn new(start: Position) -> Self {
        Knight {
            base: PieceBase::new(start, KNIGHT_WEIGHT),
        }
    }
}

impl ChessPiece for Knight {
    fn move_to(&mut self, destination: Position) -> Result<(), InvalidMoveError> {
        let name = self.name();
        self.base.commit_move(name, destination, knight_rule)
    }

    fn name(&self) -> &'static str {
        "Knight"
    }

    fn base(&self) -> &PieceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PieceBase {
        &mut self.base
    }
}

impl Display for Knight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nMy name is {}", self.base, self.name())
    }
}

/// One step in any direction. Castling is not modelled.
#[derive(Clone, Debug, PartialEq)]
pub struct King {
    base: PieceBase,
}

impl King {
    pub fn new(start: Position) -> Self {
        King {
            base: PieceBase::new(start, KING_WEIGHT),
        }
    }
}

impl ChessPiece for King {
    fn move_to(&mut self, destination: Position) -> Result<(), InvalidMoveError> {
        let name = self.name();
        self.base.commit_move(name, destination, king_rule)
    }

    fn name(&self) -> &'static str {
        "King"
    }

    fn base(&self) -> &PieceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PieceBase {
        &mut self.base
    }
}

impl Display for King {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nMy name is {}", self.base, self.name())
    }
}
