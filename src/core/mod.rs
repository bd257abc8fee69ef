pub mod definitions;
pub mod pieces;
pub mod player;
pub mod position;
pub mod utils;
