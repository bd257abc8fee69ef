use std::env;

use anyhow::Context;
use chess_pieces::{core::utils::square_color, Color, Player, Position, Rook};
use log::{debug, info};

const START: Position = Position::new(2, 2);
const DEFAULT_MOVES: [&str; 3] = ["2,7", "7,7", "5,5"];

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args: Vec<String> = env::args().skip(1).collect();
    let destinations: Vec<Position> = if args.is_empty() {
        DEFAULT_MOVES.iter().map(|arg| arg.parse::<Position>()).collect::<Result<_, _>>()?
    } else {
        args.iter()
            .map(|arg| arg.parse::<Position>().with_context(|| format!("bad destination `{arg}`")))
            .collect::<anyhow::Result<_>>()?
    };

    let mut player = Player::new(Color::White);
    player.add_piece(Box::new(Rook::new(START)));
    let rook = player
        .piece_mut(0)
        .context("player has no piece to move")?;
    info!("Starting at {} on a {} square", rook.position(), square_color(rook.position()));

    for destination in destinations {
        match rook.move_to(destination) {
            Ok(()) => println!("{} -> {destination}: ok", rook.name()),
            Err(error) => {
                debug!("{error}");
                println!("{} -> {destination}: {error}", rook.name());
            }
        }
    }

    for piece in player.iter() {
        println!("{piece}\nStanding at {}", piece.position());
    }
    println!("Material: {}", player.material());
    Ok(())
}
