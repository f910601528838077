pub mod board;
pub mod castling;
pub mod clock;
pub mod color;
pub mod config;
pub mod draw;
pub mod game_state;
pub mod moves;
pub mod piece;
pub mod square;

pub use board::*;
pub use castling::*;
pub use clock::*;
pub use color::*;
pub use config::*;
pub use draw::*;
pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
