mod keypair;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, signer::Signer};
use std::path::PathBuf;
use anyhow::Result;
use paygate_api::prelude::*;
use paygate_client::{consts::*, create_mint, create_ata, mint_to, get_payment_storage_account, program};
use keypair::{get_keypair_path, get_payer};

#[derive(Parser)]
#[command(name = "paygate-cli")]
#[command(about = "CLI for interacting with the Paygate Solana program")]
struct Cli {
    #[arg(long, global = true, help = "Path to Solana keypair file (default: ~/.config/solana/id.json)")]
    keypair: Option<PathBuf>,

    #[arg(long, global = true, default_value = "http://127.0.0.1:8899", help = "RPC URL of the cluster")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Creates the payment storage with the keypair as authority
    Init,

    /// Updates payment storage fields (authority only); omitted fields are kept
    SetParams {
        #[arg(long, help = "Price in lamports")]
        price_lamports: Option<u64>,

        #[arg(long, conflicts_with = "price_lamports", help = "Price in SOL (e.g., 0.5)")]
        price_sol: Option<f64>,

        #[arg(long, help = "Price in the token's smallest unit")]
        price_tokens: Option<u64>,

        #[arg(long, help = "Number of payments accepted so far")]
        count: Option<u16>,

        #[arg(long, help = "Payments are accepted while count is below this")]
        max_count: Option<u16>,

        #[arg(long, help = "Wallet receiving lamport payments")]
        beneficiary: Option<Pubkey>,

        #[arg(long, help = "Token account receiving token payments")]
        beneficiary_token: Option<Pubkey>,

        #[arg(long, help = "Hands the authority over to this key")]
        new_authority: Option<Pubkey>,
    },

    /// Pays the lamport price
    Pay,

    /// Pays the token price from the keypair's associated token account
    PayToken {
        #[arg(long, help = "Mint of the payment token")]
        mint: Pubkey,
    },

    /// Prints the payment storage
    GetStorage {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Creates a payment token mint for testing, funds the keypair's token account
    CreateTokenMint {
        #[arg(long, default_value_t = TOKEN_DECIMALS, help = "Decimals for the mint")]
        decimals: u8,

        #[arg(long, default_value_t = 10_000_000_000_000, help = "Initial amount to mint (in smallest units, e.g., 10_000_000_000_000 = 100,000 tokens for 8 decimals)")]
        initial_amount: u64,

        #[arg(long, help = "Also create the token account of this beneficiary wallet")]
        beneficiary: Option<Pubkey>,
    },
}

#[derive(Serialize)]
struct StorageView {
    address: String,
    authority: String,
    beneficiary: String,
    beneficiary_token: String,
    price_lamports: u64,
    price_tokens: u64,
    count: u16,
    max_count: u16,
    remaining: u16,
    bump: u8,
}

impl StorageView {
    fn new(storage: &PaymentStorage, address: &Pubkey) -> Self {
        Self {
            address: address.to_string(),
            authority: storage.authority.to_string(),
            beneficiary: storage.beneficiary.to_string(),
            beneficiary_token: storage.beneficiary_token.to_string(),
            price_lamports: storage.price_lamports,
            price_tokens: storage.price_tokens,
            count: storage.count,
            max_count: storage.max_count,
            remaining: storage.remaining(),
            bump: storage.bump,
        }
    }
}

fn print_storage(storage: &PaymentStorage, address: &Pubkey) {
    let status = if storage.is_sold_out() {
        "sold out".red()
    } else {
        format!("{} left", storage.remaining()).green()
    };

    println!("{}", "Payment Storage:".bold());
    println!("  Address: {}", address);
    println!("  Authority: {}", storage.authority);
    println!("  Beneficiary: {}", storage.beneficiary);
    println!("  Beneficiary Token Account: {}", storage.beneficiary_token);
    println!(
        "  Price: {} lamports ({} SOL)",
        storage.price_lamports,
        to_decimal(storage.price_lamports, LAMPORTS_DECIMALS)
    );
    println!("  Price in Tokens: {} units", storage.price_tokens);
    println!("  Count: {}/{} ({})", storage.count, storage.max_count, status);
}

/// `--price-sol` converted to lamports, or `--price-lamports` as given.
fn lamport_price(price_lamports: Option<u64>, price_sol: Option<f64>) -> Option<u64> {
    price_sol
        .map(|sol| from_decimal(sol, LAMPORTS_DECIMALS))
        .or(price_lamports)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = RpcClient::new(cli.url.clone());
    let keypair_path = get_keypair_path(cli.keypair);
    let payer = get_payer(keypair_path)?;

    match cli.command {
        Commands::Init => {
            let (signature, storage_pda) = program::initialize(&client, &payer).await?;
            println!("{} Signature: {}", "Payment storage initialized.".green(), signature);
            println!("Payment Storage PDA: {}", storage_pda);
            println!("Authority: {}", payer.pubkey());
        }

        Commands::SetParams {
            price_lamports,
            price_sol,
            price_tokens,
            count,
            max_count,
            beneficiary,
            beneficiary_token,
            new_authority,
        } => {
            let params = ParsedSetParamsIx {
                price_lamports: lamport_price(price_lamports, price_sol),
                price_tokens,
                count,
                max_count,
                beneficiary,
                beneficiary_token,
                new_authority,
            };
            let signature = program::set_params(&client, &payer, params).await?;
            println!("{} Signature: {}", "Params set.".green(), signature);

            let (storage, address) = get_payment_storage_account(&client).await?;
            print_storage(&storage, &address);
        }

        Commands::Pay => {
            let (signature, amount) = program::pay_with_lamports(&client, &payer).await?;
            println!(
                "{} Paid {} lamports. Signature: {}",
                "Payment accepted.".green(),
                amount,
                signature
            );
        }

        Commands::PayToken { mint } => {
            let (signature, amount) = program::pay_with_tokens(&client, &payer, mint).await?;
            println!(
                "{} Paid {} token units. Signature: {}",
                "Payment accepted.".green(),
                amount,
                signature
            );
        }

        Commands::GetStorage { json } => {
            let (storage, address) = get_payment_storage_account(&client).await?;
            if json {
                let view = StorageView::new(&storage, &address);
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_storage(&storage, &address);
            }
        }

        Commands::CreateTokenMint { decimals, initial_amount, beneficiary } => {
            let (mint, mint_signature) = create_mint(&client, &payer, decimals).await?;
            println!("Token mint created. Mint: {}. Signature: {}", mint, mint_signature);

            let (ata, ata_signature) = create_ata(&client, &payer, &mint, &payer.pubkey(), None).await?;
            println!("Created token account {}. Signature: {}", ata, ata_signature);

            let mint_to_signature = mint_to(&client, &payer, &mint, &ata, initial_amount).await?;
            println!("Minted {} units to {}. Signature: {}", initial_amount, ata, mint_to_signature);

            if let Some(beneficiary) = beneficiary {
                let (beneficiary_ata, signature) = create_ata(&client, &payer, &mint, &beneficiary, None).await?;
                println!("Beneficiary token account: {}. Signature: {}", beneficiary_ata, signature);
                println!("Use it with: set-params --beneficiary-token {}", beneficiary_ata);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_in_sol_becomes_lamports() {
        assert_eq!(lamport_price(None, Some(0.5)), Some(500_000_000));
        assert_eq!(lamport_price(Some(12_345_678), None), Some(12_345_678));
        assert_eq!(lamport_price(None, None), None);
    }

    #[test]
    fn price_flags_are_exclusive() {
        let res = Cli::try_parse_from([
            "paygate", "set-params", "--price-lamports", "1", "--price-sol", "0.5",
        ]);
        assert!(res.is_err());

        let cli = Cli::try_parse_from(["paygate", "set-params", "--price-sol", "0.5"]).unwrap();
        let Commands::SetParams { price_lamports, price_sol, .. } = cli.command else {
            panic!("expected set-params");
        };
        assert_eq!(lamport_price(price_lamports, price_sol), Some(500_000_000));
    }
}
