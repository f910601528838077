//! One function per program instruction, mirroring the on-chain account
//! lists. Adversary accounts are derived by reading the game back first.

use anchor_lang::system_program;
use anyhow::{anyhow, Result};
use solana_sdk::pubkey::Pubkey;
use tracing::info;

use sol_chess::chess::{Color, GameConfig, Square};
use sol_chess::state::Game;

use crate::client::ChessClient;

pub fn parse_color(s: &str) -> Result<Color> {
    match s.to_ascii_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        other => Err(anyhow!("unknown color {other:?}, expected white or black")),
    }
}

pub fn initialize(client: &ChessClient) -> Result<()> {
    client.send(
        "initialize",
        sol_chess::accounts::Initialize {},
        sol_chess::instruction::Initialize {},
    )?;
    Ok(())
}

pub fn create_user(client: &ChessClient) -> Result<()> {
    client.send(
        "initialize_user",
        sol_chess::accounts::InitializeUser {
            payer: client.payer_pubkey(),
            user: client.user_pda(),
            system_program: system_program::ID,
        },
        sol_chess::instruction::InitializeUser {},
    )?;
    Ok(())
}

pub fn create_game(client: &ChessClient, config: GameConfig) -> Result<()> {
    let user = client.user_pda();
    let game = Game::pda(user, client.fetch_user(user)?.games).0;
    client.send(
        "initialize_game",
        sol_chess::accounts::InitializeGame {
            payer: client.payer_pubkey(),
            user,
            game,
            system_program: system_program::ID,
        },
        sol_chess::instruction::InitializeGame { config },
    )?;
    info!(%game, "game created");
    Ok(())
}

pub fn join_game(client: &ChessClient, game: Pubkey, color: Color) -> Result<()> {
    client.send(
        "join_game",
        sol_chess::accounts::JoinGame {
            payer: client.payer_pubkey(),
            user: client.user_pda(),
            game,
        },
        sol_chess::instruction::JoinGame { color },
    )?;
    Ok(())
}

pub fn move_piece(client: &ChessClient, game: Pubkey, from: Square, to: Square) -> Result<()> {
    let user = client.user_pda();
    let adversary_user = adversary_of(client, game, user)?;
    client.send(
        "move_piece",
        sol_chess::accounts::MovePiece {
            payer: client.payer_pubkey(),
            user,
            adversary_user,
            game,
        },
        sol_chess::instruction::MovePiece { from, to },
    )?;
    Ok(())
}

pub fn offer_draw(client: &ChessClient, game: Pubkey) -> Result<()> {
    let user = client.user_pda();
    let adversary_user = adversary_of(client, game, user)?;
    client.send(
        "offer_draw",
        sol_chess::accounts::OfferDraw {
            payer: client.payer_pubkey(),
            user,
            adversary_user,
            game,
        },
        sol_chess::instruction::OfferDraw {},
    )?;
    Ok(())
}

pub fn resign(client: &ChessClient, game: Pubkey) -> Result<()> {
    let user = client.user_pda();
    let adversary_user = adversary_of(client, game, user)?;
    client.send(
        "resign",
        sol_chess::accounts::Resign {
            payer: client.payer_pubkey(),
            user,
            adversary_user,
            game,
        },
        sol_chess::instruction::Resign {},
    )?;
    Ok(())
}

pub fn leave_game(client: &ChessClient, game: Pubkey) -> Result<()> {
    client.send(
        "leave_game",
        sol_chess::accounts::LeaveGame {
            payer: client.payer_pubkey(),
            user: client.user_pda(),
            game,
        },
        sol_chess::instruction::LeaveGame {},
    )?;
    Ok(())
}

/// Settles a flagged game. The seats are read off the game, so anyone can
/// crank this without holding a seat themselves.
pub fn check_timer(client: &ChessClient, game: Pubkey) -> Result<()> {
    let state = client.fetch_game(game)?;
    let color = state
        .turn()
        .ok_or_else(|| anyhow!("the game is not running"))?;
    let user = state
        .seat(color)
        .ok_or_else(|| anyhow!("the {color} seat is empty"))?;
    let adversary_user = state
        .adversary(color)
        .ok_or_else(|| anyhow!("the adversary seat is empty"))?;
    client.send(
        "check_timer",
        sol_chess::accounts::CheckTimer {
            payer: client.payer_pubkey(),
            user,
            adversary_user,
            game,
        },
        sol_chess::instruction::CheckTimer {},
    )?;
    Ok(())
}

pub fn deposit(client: &ChessClient, amount: u64) -> Result<()> {
    client.send(
        "deposit",
        sol_chess::accounts::Deposit {
            payer: client.payer_pubkey(),
            user: client.user_pda(),
            vault: ChessClient::vault_pda(),
            system_program: system_program::ID,
        },
        sol_chess::instruction::Deposit { amount },
    )?;
    Ok(())
}

pub fn withdraw(client: &ChessClient, amount: u64) -> Result<()> {
    client.send(
        "withdraw",
        sol_chess::accounts::Withdraw {
            payer: client.payer_pubkey(),
            user: client.user_pda(),
            vault: ChessClient::vault_pda(),
            system_program: system_program::ID,
        },
        sol_chess::instruction::Withdraw { amount },
    )?;
    Ok(())
}

pub fn show_game(client: &ChessClient, game: Pubkey) -> Result<()> {
    let state = client.fetch_game(game)?;
    println!("{}", state.board);
    println!("status: {}", state.state);
    println!("white:  {}", seat_label(state.white));
    println!("black:  {}", seat_label(state.black));
    if let Some(clock) = state.clock {
        println!(
            "clock:  white {}s, black {}s",
            clock.remaining(Color::White),
            clock.remaining(Color::Black)
        );
    }
    if state.has_wager() {
        println!("wager:  {} lamports a seat", state.wager_amount());
    }
    Ok(())
}

pub fn show_user(client: &ChessClient) -> Result<()> {
    let address = client.user_pda();
    let user = client.fetch_user(address)?;
    println!("user:    {address}");
    println!("elo:     {}", user.elo);
    println!("games:   {}", user.games);
    println!("balance: {} lamports", user.balance);
    match user.current_game {
        Some(game) => println!("playing: {game}"),
        None => println!("playing: nothing"),
    }
    Ok(())
}

fn adversary_of(client: &ChessClient, game: Pubkey, user: Pubkey) -> Result<Pubkey> {
    let state = client.fetch_game(game)?;
    let color = state
        .player_color(user)
        .ok_or_else(|| anyhow!("the payer has no seat in this game"))?;
    state
        .adversary(color)
        .ok_or_else(|| anyhow!("the adversary seat is empty"))
}

fn seat_label(seat: Option<Pubkey>) -> String {
    match seat {
        Some(user) => user.to_string(),
        None => "open".to_string(),
    }
}
