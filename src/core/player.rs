use log::debug;

use crate::core::definitions::{ChessPiece, Color};

/** One side of the game and the pieces it owns, in insertion order. */
#[derive(Debug, Default)]
pub struct Player {
    color: Color,
    pieces: Vec<Box<dyn ChessPiece>>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Player {
            color,
            pieces: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Appends `piece`. The same kind of piece on the same square may be
    /// added more than once.
    pub fn add_piece(&mut self, piece: Box<dyn ChessPiece>) {
        debug!("{} player takes {} at {}", self.color, piece.name(), piece.position());
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[Box<dyn ChessPiece>] {
        &self.pieces
    }

    pub fn piece_mut(&mut self, index: usize) -> Option<&mut (dyn ChessPiece + 'static)> {
        self.pieces.get_mut(index).map(|piece| &mut **piece)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn ChessPiece + 'static)> + '_ {
        self.pieces.iter().map(|piece| &**piece)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn ChessPiece + 'static)> + '_ {
        self.pieces.iter_mut().map(|piece| &mut **piece)
    }

    pub fn alive_pieces(&self) -> impl Iterator<Item = &(dyn ChessPiece + 'static)> + '_ {
        self.iter().filter(|piece| piece.is_alive())
    }

    /// Sum of weights of the pieces still in play. Pieces with an infinite
    /// weight (the king) are priceless and left out of the sum.
    pub fn material(&self) -> f64 {
        self.alive_pieces()
            .map(|piece| piece.weight())
            .filter(|weight| weight.is_finite())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
