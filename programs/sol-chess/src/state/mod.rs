pub mod game;
pub mod user;

pub use game::*;
pub use user::*;
