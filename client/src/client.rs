//! Thin wrapper around the blocking RPC client: holds the payer keypair,
//! submits single-instruction transactions, and fetches program accounts.

use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use anyhow::{anyhow, Context as _, Result};
use solana_rpc_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use sol_chess::state::{Game, User};

pub struct ChessClient {
    rpc: RpcClient,
    payer: Keypair,
}

impl ChessClient {
    pub fn new(url: &str, keypair_path: &Path) -> Result<Self> {
        let payer = read_keypair_file(keypair_path)
            .map_err(|err| anyhow!("reading keypair {}: {err}", keypair_path.display()))?;
        let rpc = RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed());
        debug!(url, payer = %payer.pubkey(), "client configured");
        Ok(Self { rpc, payer })
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// The payer's user account address, `PDA(["user", payer])`.
    pub fn user_pda(&self) -> Pubkey {
        User::pda(self.payer.pubkey()).0
    }

    pub fn vault_pda() -> Pubkey {
        Pubkey::find_program_address(&[b"vault"], &sol_chess::ID).0
    }

    /// Submits one program instruction signed by the payer and prints the
    /// confirmed transaction signature to stdout.
    pub fn send(
        &self,
        label: &str,
        accounts: impl ToAccountMetas,
        data: impl InstructionData,
    ) -> Result<Signature> {
        let ix = Instruction {
            program_id: sol_chess::ID,
            accounts: accounts.to_account_metas(None),
            data: data.data(),
        };
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .context("fetching a recent blockhash")?;
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.payer.pubkey()),
            &[&self.payer],
            blockhash,
        );
        let signature = self
            .rpc
            .send_and_confirm_transaction(&tx)
            .with_context(|| format!("submitting {label}"))?;
        println!("{signature}");
        Ok(signature)
    }

    pub fn fetch_user(&self, address: Pubkey) -> Result<User> {
        let data = self
            .rpc
            .get_account_data(&address)
            .with_context(|| format!("no user account at {address}"))?;
        User::try_deserialize(&mut data.as_slice()).context("decoding user account")
    }

    pub fn fetch_game(&self, address: Pubkey) -> Result<Game> {
        let data = self
            .rpc
            .get_account_data(&address)
            .with_context(|| format!("no game account at {address}"))?;
        Game::try_deserialize(&mut data.as_slice()).context("decoding game account")
    }

    /// Airdrops lamports to the payer and waits for confirmation. Only local
    /// and test clusters honor this.
    pub fn airdrop(&self, lamports: u64) -> Result<()> {
        let signature = self
            .rpc
            .request_airdrop(&self.payer.pubkey(), lamports)
            .context("requesting airdrop")?;
        while !self.rpc.confirm_transaction(&signature)? {
            sleep(Duration::from_millis(400));
        }
        info!(%signature, "airdrop confirmed");
        println!("{signature}");
        Ok(())
    }
}
