use crate::chess::{
    moves, Board, CastlingRights, Color, DrawState, GameClock, GameConfig, GameState, Square,
};
use crate::error::SolChessError;
use anchor_lang::prelude::*;

pub const SEED_GAME: &[u8] = b"game";

/// A single match. Seats hold the players' `User` PDAs; `owner` and `id` are
/// the creator's user PDA and its games counter at creation time, which also
/// seed this account's address.
#[account]
pub struct Game {
    pub bump: u8,
    pub owner: Pubkey,
    pub id: u64,
    pub created_at: i64,
    pub board: Board,
    pub state: GameState,
    pub white: Option<Pubkey>,
    pub black: Option<Pubkey>,
    pub enpassant: Option<Square>,
    pub castling: CastlingRights,
    pub draw_state: DrawState,
    pub config: GameConfig,
    pub clock: Option<GameClock>,
}

impl Game {
    pub const LEN: usize = 8 + // discriminator
        1 + // bump
        32 + // owner
        8 + // id
        8 + // created_at
        64 + // board
        1 + // state
        33 + // white
        33 + // black
        3 + // enpassant
        4 + // castling
        1 + // draw_state
        20 + // config
        33; // clock

    pub fn pda(owner: Pubkey, game_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[SEED_GAME, owner.as_ref(), &game_id.to_be_bytes()],
            &crate::ID,
        )
    }

    pub fn seat(&self, color: Color) -> Option<Pubkey> {
        if color.is_white() {
            self.white
        } else {
            self.black
        }
    }

    pub fn color_available(&self, color: Color) -> bool {
        self.seat(color).is_none()
    }

    pub fn seat_player(&mut self, user: Pubkey, color: Color) {
        if color.is_white() {
            self.white = Some(user);
        } else {
            self.black = Some(user);
        }
    }

    pub fn vacate(&mut self, color: Color) {
        if color.is_white() {
            self.white = None;
        } else {
            self.black = None;
        }
    }

    pub fn is_full(&self) -> bool {
        self.white.is_some() && self.black.is_some()
    }

    /// White moves first; timed games arm their clock here.
    pub fn start(&mut self, now: i64) {
        self.state = GameState::White;
        self.clock = self.config.clock(now);
    }

    pub fn turn(&self) -> Option<Color> {
        self.state.turn()
    }

    pub fn player_color(&self, user: Pubkey) -> Option<Color> {
        if self.white == Some(user) {
            Some(Color::White)
        } else if self.black == Some(user) {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn adversary(&self, color: Color) -> Option<Pubkey> {
        self.seat(color.opposite())
    }

    pub fn is_waiting(&self) -> bool {
        self.state.is_waiting()
    }

    pub fn is_ongoing(&self) -> bool {
        self.state.is_ongoing()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn is_rated(&self) -> bool {
        self.config.is_rated
    }

    pub fn is_timed(&self) -> bool {
        self.clock.is_some()
    }

    pub fn has_wager(&self) -> bool {
        self.config.has_wager()
    }

    pub fn wager_amount(&self) -> u64 {
        self.config.wager_amount()
    }

    /// Both escrowed wagers, paid out to the winner or split on a draw.
    pub fn pot(&self) -> u64 {
        self.wager_amount().saturating_mul(2)
    }

    /// True when the side to move has run out its clock.
    pub fn time_expired(&self, now: i64) -> bool {
        match (self.clock, self.turn()) {
            (Some(clock), Some(color)) => clock.expired(color, now),
            _ => false,
        }
    }

    /// Validates and plays one move for `color`, then passes the turn. The
    /// board only changes if the move is legal all the way through.
    pub fn apply_move(&mut self, color: Color, from: Square, to: Square, now: i64) -> Result<()> {
        let kind = moves::classify(&self.board, color, from, to, self.enpassant, self.castling)
            .ok_or(SolChessError::InvalidMove)?;
        let mut board = self.board;
        let next_enpassant = moves::apply(&mut board, color, from, to, kind);
        require!(!moves::in_check(&board, color), SolChessError::KingInCheck);

        self.board = board;
        self.enpassant = next_enpassant;
        self.castling.update(color, from, to);
        if let Some(clock) = self.clock.as_mut() {
            clock.record_move(color, now);
        }
        self.draw_state.reset();
        self.state = self.state.next();
        Ok(())
    }

    pub fn is_checkmated(&self, color: Color) -> bool {
        moves::is_checkmate(&self.board, color, self.enpassant, self.castling)
    }

    pub fn is_stalemated(&self, color: Color) -> bool {
        moves::is_stalemate(&self.board, color, self.enpassant, self.castling)
    }

    pub fn set_winner(&mut self, color: Color) {
        self.state = GameState::won_by(color);
    }

    pub fn set_draw(&mut self) {
        self.state = GameState::Draw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_game(config: GameConfig) -> Game {
        Game {
            bump: 255,
            owner: Pubkey::new_unique(),
            id: 0,
            created_at: 1_000,
            board: Board::default(),
            state: GameState::Waiting,
            white: None,
            black: None,
            enpassant: None,
            castling: CastlingRights::default(),
            draw_state: DrawState::Neither,
            config,
            clock: None,
        }
    }

    fn square(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn seats_fill_independently() {
        let mut game = open_game(GameConfig::default());
        let white = Pubkey::new_unique();
        let black = Pubkey::new_unique();

        assert!(game.color_available(Color::White));
        game.seat_player(white, Color::White);
        assert!(!game.color_available(Color::White));
        assert!(game.color_available(Color::Black));
        assert!(!game.is_full());

        game.seat_player(black, Color::Black);
        assert!(game.is_full());
        assert_eq!(game.player_color(white), Some(Color::White));
        assert_eq!(game.player_color(black), Some(Color::Black));
        assert_eq!(game.adversary(Color::White), Some(black));
        assert_eq!(game.player_color(Pubkey::new_unique()), None);

        game.vacate(Color::White);
        assert!(game.color_available(Color::White));
    }

    #[test]
    fn starting_arms_the_clock_for_timed_games() {
        let mut untimed = open_game(GameConfig::default());
        untimed.start(500);
        assert_eq!(untimed.turn(), Some(Color::White));
        assert!(!untimed.is_timed());
        assert!(!untimed.time_expired(1_000_000));

        let mut timed = open_game(GameConfig {
            timer: Some(60),
            increment: Some(0),
            ..GameConfig::default()
        });
        timed.start(500);
        assert!(timed.is_timed());
        assert!(!timed.time_expired(559));
        assert!(timed.time_expired(560));
    }

    #[test]
    fn a_move_passes_the_turn_and_withdraws_draw_offers() {
        let mut game = open_game(GameConfig::default());
        game.start(0);
        game.draw_state.register_offer(Color::Black);

        game.apply_move(Color::White, square("e2"), square("e4"), 0)
            .unwrap();
        assert_eq!(game.turn(), Some(Color::Black));
        assert_eq!(game.draw_state, DrawState::Neither);
        assert_eq!(game.enpassant, Some(square("e3")));
    }

    #[test]
    fn illegal_moves_leave_the_game_untouched() {
        let mut game = open_game(GameConfig::default());
        game.start(0);
        let before = game.board;

        assert!(game
            .apply_move(Color::White, square("e2"), square("e5"), 0)
            .is_err());
        assert_eq!(game.board, before);
        assert_eq!(game.turn(), Some(Color::White));
    }

    #[test]
    fn fools_mate_ends_in_checkmate() {
        let mut game = open_game(GameConfig::default());
        game.start(0);
        let line = [
            (Color::White, "f2", "f3"),
            (Color::Black, "e7", "e5"),
            (Color::White, "g2", "g4"),
            (Color::Black, "d8", "h4"),
        ];
        for (color, from, to) in line {
            game.apply_move(color, square(from), square(to), 0).unwrap();
        }
        assert!(game.is_checkmated(Color::White));
        assert!(!game.is_stalemated(Color::White));
        game.set_winner(Color::Black);
        assert_eq!(game.state, GameState::BlackWon);
        assert!(game.is_over());
    }

    #[test]
    fn the_pot_is_both_wagers() {
        let game = open_game(GameConfig {
            wager: Some(1_000),
            ..GameConfig::default()
        });
        assert!(game.has_wager());
        assert_eq!(game.pot(), 2_000);
        assert_eq!(open_game(GameConfig::default()).pot(), 0);
    }
}
