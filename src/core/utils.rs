use crate::core::definitions::Color;
use crate::core::position::Position;

#[inline]
fn deltas(a: Position, b: Position) -> (u32, u32) {
    (a.file().abs_diff(b.file()), a.rank().abs_diff(b.rank()))
}

/// Manhattan distance between two squares.
pub fn distance(from: Position, to: Position) -> u64 {
    let (file, rank) = deltas(from, to);
    u64::from(file) + u64::from(rank)
}

/// Largest single-axis step, i.e. how many king moves separate the squares.
pub fn chebyshev_distance(from: Position, to: Position) -> u32 {
    let (file, rank) = deltas(from, to);
    file.max(rank)
}

pub fn is_in_straight_line(a: Position, b: Position) -> bool {
    a.file() == b.file() || a.rank() == b.rank()
}

pub fn is_in_diagonal_line(a: Position, b: Position) -> bool {
    let (file, rank) = deltas(a, b);
    file == rank
}

/** Squares with an odd coordinate sum are white, (0,0) is black. */
pub fn square_color(position: Position) -> Color {
    if (i64::from(position.file()) + i64::from(position.rank())).rem_euclid(2) == 1 {
        Color::White
    } else {
        Color::Black
    }
}
