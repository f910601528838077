pub mod check_timer;
pub mod deposit;
pub mod initialize;
pub mod initialize_game;
pub mod initialize_user;
pub mod join_game;
pub mod leave_game;
pub mod move_piece;
pub mod offer_draw;
pub mod resign;
pub mod withdraw;

pub use check_timer::*;
pub use deposit::*;
pub use initialize::*;
pub use initialize_game::*;
pub use initialize_user::*;
pub use join_game::*;
pub use leave_game::*;
pub use move_piece::*;
pub use offer_draw::*;
pub use resign::*;
pub use withdraw::*;
