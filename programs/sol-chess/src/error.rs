use anchor_lang::prelude::*;

#[error_code]
pub enum SolChessError {
    #[msg("User Already In Game")]
    UserAlreadyInGame,

    #[msg("Color Not Available")]
    ColorNotAvailable,

    #[msg("Game Already Started")]
    GameAlreadyStarted,

    #[msg("Invalid Game State")]
    InvalidGameState,

    #[msg("Not Users Turn")]
    NotUsersTurn,

    #[msg("Invalid Move")]
    InvalidMove,

    #[msg("King In Check")]
    KingInCheck,

    #[msg("Not In Game")]
    NotInGame,

    #[msg("Invalid Adversary User Account")]
    InvalidAdversaryUserAccount,

    #[msg("Already Offered Draw")]
    AlreadyOfferedDraw,

    #[msg("Insufficient Balance")]
    InsufficientBalance,

    #[msg("Balance Overflow")]
    BalanceOverflow,

    #[msg("Invalid Game Config")]
    InvalidGameConfig,

    #[msg("Game Not Timed")]
    GameNotTimed,

    #[msg("Time Expired")]
    TimeExpired,
}
