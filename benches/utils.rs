use chess_pieces::{
    core::utils::{is_in_diagonal_line, is_in_straight_line},
    Bishop, ChessPiece, Color, Knight, Player, Position, Queen, Rook,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn squares() -> impl Iterator<Item = Position> {
    (0..8).flat_map(|file| (0..8).map(move |rank| Position::new(file, rank)))
}

fn count_lines(from: Position) -> usize {
    squares()
        .filter(|to| is_in_straight_line(from, *to) || is_in_diagonal_line(from, *to))
        .count()
}

fn try_every_square(piece: &mut dyn ChessPiece) -> usize {
    let start = piece.position();
    let mut legal = 0;
    for to in squares() {
        if piece.move_to(to).is_ok() {
            legal += 1;
            // go back, a rule that allows a move allows the reverse one
            let _ = piece.move_to(start);
        }
    }
    legal
}

fn full_side() -> Player {
    let mut player = Player::new(Color::White);
    player.add_piece(Box::new(Rook::new(Position::new(0, 0))));
    player.add_piece(Box::new(Knight::new(Position::new(1, 0))));
    player.add_piece(Box::new(Bishop::new(Position::new(2, 0))));
    player.add_piece(Box::new(Queen::new(Position::new(3, 0))));
    player
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("line checks", |b| b.iter(|| count_lines(black_box(Position::new(3, 4)))));
    c.bench_function("rook every square", |b| b.iter(|| {
        let mut rook = Rook::new(Position::new(3, 4));
        try_every_square(black_box(&mut rook))
    }));
    c.bench_function("player every square", |b| b.iter(|| {
        let mut player = full_side();
        player
            .iter_mut()
            .map(|piece| try_every_square(piece))
            .sum::<usize>()
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
