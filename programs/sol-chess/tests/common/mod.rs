//! Shared harness for the integration tests: an in-process banks client
//! running the program as a builtin, funded wallets, and instruction helpers
//! built from the program's generated client types.

#![allow(dead_code)]

use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account;
use solana_sdk::clock::Clock;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};

use sol_chess::chess::{Color, GameConfig, Square};
use sol_chess::error::SolChessError;
use sol_chess::state::{Game, User};

pub const WALLET_LAMPORTS: u64 = 20_000_000_000;
pub const SOL: u64 = 1_000_000_000;

/// Anchor's entry ties the account slice lifetime to the account infos, so
/// the borrowed slice is leaked to satisfy the test runtime's fn signature.
fn process(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    sol_chess::entry(program_id, accounts, data)
}

pub fn program_test() -> ProgramTest {
    ProgramTest::new("sol_chess", sol_chess::ID, processor!(process))
}

/// Boots the test validator with `wallets` funded system accounts alongside
/// the default payer.
pub async fn setup(wallets: usize) -> (ProgramTestContext, Vec<Keypair>) {
    let keypairs: Vec<Keypair> = (0..wallets).map(|_| Keypair::new()).collect();
    let mut pt = program_test();
    for keypair in &keypairs {
        pt.add_account(
            keypair.pubkey(),
            Account::new(WALLET_LAMPORTS, 0, &anchor_lang::system_program::ID),
        );
    }
    let ctx = pt.start_with_context().await;
    (ctx, keypairs)
}

pub fn user_pda(wallet: Pubkey) -> Pubkey {
    User::pda(wallet).0
}

pub fn vault_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"vault"], &sol_chess::ID).0
}

pub fn square(name: &str) -> Square {
    name.parse().unwrap()
}

pub fn ix(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: sol_chess::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

pub async fn send(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    accounts: impl ToAccountMetas,
    data: impl InstructionData,
) -> Result<Signature, BanksClientError> {
    // a fresh blockhash keeps repeated identical instructions distinct
    let blockhash = ctx.get_new_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &[ix(accounts, data)],
        Some(&payer.pubkey()),
        &[payer],
        blockhash,
    );
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub async fn create_user(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::InitializeUser {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            system_program: anchor_lang::system_program::ID,
        },
        sol_chess::instruction::InitializeUser {},
    )
    .await
}

/// Creates a game owned by `wallet`'s user account and returns its address.
pub async fn create_game(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    config: GameConfig,
) -> Result<Pubkey, BanksClientError> {
    let user = user_pda(wallet.pubkey());
    let game = Game::pda(user, fetch_user(ctx, user).await.games).0;
    send(
        ctx,
        wallet,
        sol_chess::accounts::InitializeGame {
            payer: wallet.pubkey(),
            user,
            game,
            system_program: anchor_lang::system_program::ID,
        },
        sol_chess::instruction::InitializeGame { config },
    )
    .await?;
    Ok(game)
}

pub async fn join(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    game: Pubkey,
    color: Color,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::JoinGame {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            game,
        },
        sol_chess::instruction::JoinGame { color },
    )
    .await
}

pub async fn play(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    adversary_user: Pubkey,
    game: Pubkey,
    from: &str,
    to: &str,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::MovePiece {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            adversary_user,
            game,
        },
        sol_chess::instruction::MovePiece {
            from: square(from),
            to: square(to),
        },
    )
    .await
}

pub async fn offer_draw(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    adversary_user: Pubkey,
    game: Pubkey,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::OfferDraw {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            adversary_user,
            game,
        },
        sol_chess::instruction::OfferDraw {},
    )
    .await
}

pub async fn resign(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    adversary_user: Pubkey,
    game: Pubkey,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::Resign {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            adversary_user,
            game,
        },
        sol_chess::instruction::Resign {},
    )
    .await
}

pub async fn leave(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    game: Pubkey,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::LeaveGame {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            game,
        },
        sol_chess::instruction::LeaveGame {},
    )
    .await
}

/// Cranks the timer with the context payer, which anyone may do.
pub async fn check_timer(
    ctx: &mut ProgramTestContext,
    user: Pubkey,
    adversary_user: Pubkey,
    game: Pubkey,
) -> Result<Signature, BanksClientError> {
    let payer = ctx.payer.insecure_clone();
    send(
        ctx,
        &payer,
        sol_chess::accounts::CheckTimer {
            payer: payer.pubkey(),
            user,
            adversary_user,
            game,
        },
        sol_chess::instruction::CheckTimer {},
    )
    .await
}

pub async fn deposit(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    amount: u64,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::Deposit {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            vault: vault_pda(),
            system_program: anchor_lang::system_program::ID,
        },
        sol_chess::instruction::Deposit { amount },
    )
    .await
}

pub async fn withdraw(
    ctx: &mut ProgramTestContext,
    wallet: &Keypair,
    amount: u64,
) -> Result<Signature, BanksClientError> {
    send(
        ctx,
        wallet,
        sol_chess::accounts::Withdraw {
            payer: wallet.pubkey(),
            user: user_pda(wallet.pubkey()),
            vault: vault_pda(),
            system_program: anchor_lang::system_program::ID,
        },
        sol_chess::instruction::Withdraw { amount },
    )
    .await
}

pub async fn fetch_user(ctx: &mut ProgramTestContext, address: Pubkey) -> User {
    let account = ctx
        .banks_client
        .get_account(address)
        .await
        .unwrap()
        .expect("user account exists");
    User::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn fetch_game(ctx: &mut ProgramTestContext, address: Pubkey) -> Game {
    let account = ctx
        .banks_client
        .get_account(address)
        .await
        .unwrap()
        .expect("game account exists");
    Game::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn lamports(ctx: &mut ProgramTestContext, address: Pubkey) -> u64 {
    ctx.banks_client
        .get_account(address)
        .await
        .unwrap()
        .map(|account| account.lamports)
        .unwrap_or(0)
}

/// Advances the on-chain clock without touching anything else.
pub async fn warp_seconds(ctx: &mut ProgramTestContext, seconds: i64) {
    let mut clock: Clock = ctx.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp += seconds;
    ctx.set_sysvar(&clock);
}

pub fn assert_chess_error(err: BanksClientError, expected: SolChessError) {
    let tx_err = match err {
        BanksClientError::TransactionError(err) => err,
        BanksClientError::SimulationError { err, .. } => err,
        other => panic!("expected a transaction error, got {other:?}"),
    };
    match tx_err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            assert_eq!(code, u32::from(expected));
        }
        other => panic!("expected a custom program error, got {other:?}"),
    }
}
