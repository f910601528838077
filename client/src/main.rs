use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;

use sol_chess::chess::{GameConfig, Square};

mod client;
mod commands;

use client::ChessClient;

#[derive(Parser)]
#[command(name = "sol-chess", version, about = "Command-line client for the sol-chess program")]
struct Cli {
    /// RPC endpoint of the cluster to talk to
    #[arg(
        long,
        env = "ANCHOR_PROVIDER_URL",
        default_value = "http://localhost:8899"
    )]
    url: String,

    /// Path to the payer keypair file
    #[arg(long, env = "ANCHOR_WALLET")]
    keypair: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the program with its no-op instruction
    Initialize,
    /// Create your user account
    CreateUser,
    /// Open a new game
    CreateGame {
        /// Seconds on each side's clock; needs --increment too
        #[arg(long)]
        timer: Option<u32>,
        /// Seconds banked back after each move
        #[arg(long)]
        increment: Option<u32>,
        /// Exchange Elo when the game settles
        #[arg(long)]
        rated: bool,
        /// Lamports each seat escrows from its ledger balance
        #[arg(long)]
        wager: Option<u64>,
    },
    /// Take a seat in a waiting game
    Join { game: Pubkey, color: String },
    /// Play a move, squares in algebraic notation like e2 e4
    Move {
        game: Pubkey,
        from: String,
        to: String,
    },
    /// Offer a draw, or accept a standing one
    OfferDraw { game: Pubkey },
    /// Concede the game
    Resign { game: Pubkey },
    /// Give up a seat before the game starts
    Leave { game: Pubkey },
    /// Settle a timed game whose side to move has flagged
    CheckTimer { game: Pubkey },
    /// Move lamports from your wallet into your ledger balance
    Deposit { lamports: u64 },
    /// Pay ledger balance back out to your wallet
    Withdraw { lamports: u64 },
    /// Print a game's board and status
    ShowGame { game: Pubkey },
    /// Print your user account
    ShowUser,
    /// Airdrop lamports to the payer on a local cluster
    Airdrop { lamports: u64 },
}

fn default_keypair_path() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config/solana/id.json"))
        .unwrap_or_else(|| PathBuf::from("id.json"))
}

fn parse_square(s: &str) -> Result<Square> {
    s.parse()
        .map_err(|_| anyhow!("{s:?} is not a square, expected something like e4"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let keypair = cli.keypair.unwrap_or_else(default_keypair_path);
    let client = ChessClient::new(&cli.url, &keypair)?;

    match cli.command {
        Commands::Initialize => commands::initialize(&client),
        Commands::CreateUser => commands::create_user(&client),
        Commands::CreateGame {
            timer,
            increment,
            rated,
            wager,
        } => commands::create_game(
            &client,
            GameConfig {
                timer,
                increment,
                is_rated: rated,
                wager,
            },
        ),
        Commands::Join { game, color } => {
            commands::join_game(&client, game, commands::parse_color(&color)?)
        }
        Commands::Move { game, from, to } => {
            commands::move_piece(&client, game, parse_square(&from)?, parse_square(&to)?)
        }
        Commands::OfferDraw { game } => commands::offer_draw(&client, game),
        Commands::Resign { game } => commands::resign(&client, game),
        Commands::Leave { game } => commands::leave_game(&client, game),
        Commands::CheckTimer { game } => commands::check_timer(&client, game),
        Commands::Deposit { lamports } => commands::deposit(&client, lamports),
        Commands::Withdraw { lamports } => commands::withdraw(&client, lamports),
        Commands::ShowGame { game } => commands::show_game(&client, game),
        Commands::ShowUser => commands::show_user(&client),
        Commands::Airdrop { lamports } => client.airdrop(lamports),
    }
}
