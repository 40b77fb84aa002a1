use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
};
use spl_token::solana_program::program_pack::Pack;
use spl_token::instruction as token_instruction;
use spl_token::ID as TOKEN_PROGRAM_ID;

use crate::utils::send_instructions;

/// Creates a new SPL token mint with `payer` as mint authority.
pub async fn create_mint(
    client: &RpcClient,
    payer: &Keypair,
    decimals: u8,
) -> Result<(Pubkey, Signature)> {
    let mint = Keypair::new();
    let mint_pubkey = mint.pubkey();
    let payer_pk = payer.pubkey();

    let mint_len = spl_token::state::Mint::LEN;
    let mint_rent = client
        .get_minimum_balance_for_rent_exemption(mint_len)
        .await?;

    let create_mint_ix = system_instruction::create_account(
        &payer_pk,
        &mint_pubkey,
        mint_rent,
        mint_len as u64,
        &TOKEN_PROGRAM_ID,
    );

    let init_mint_ix = token_instruction::initialize_mint2(
        &TOKEN_PROGRAM_ID,
        &mint_pubkey,
        &payer_pk,   // mint authority
        None,        // freeze authority
        decimals,
    )?;

    let signature = send_instructions(client, payer, &[create_mint_ix, init_mint_ix], &[&mint])
        .await
        .map_err(|e| anyhow!("Failed to create mint: {}", e))?;

    println!("Created mint {}. Signature: {}", mint_pubkey, signature);
    Ok((mint_pubkey, signature))
}

async fn check_token_program_owned(client: &RpcClient, address: &Pubkey, what: &str) -> Result<()> {
    let account = client
        .get_account(address)
        .await
        .map_err(|e| anyhow!("Failed to fetch {} {}: {}", what, address, e))?;

    if account.owner != TOKEN_PROGRAM_ID {
        return Err(anyhow!(
            "{} {} is owned by {}, not the token program {}",
            what,
            address,
            account.owner,
            TOKEN_PROGRAM_ID
        ));
    }
    Ok(())
}

/// Mints `amount` raw units to `ata`. `payer` must be the mint authority.
pub async fn mint_to(
    client: &RpcClient,
    payer: &Keypair,
    mint: &Pubkey,
    ata: &Pubkey,
    amount: u64,
) -> Result<Signature> {
    check_token_program_owned(client, mint, "Mint").await?;
    check_token_program_owned(client, ata, "Token account").await?;

    let mint_to_ix = token_instruction::mint_to(
        &TOKEN_PROGRAM_ID,
        mint,
        ata,
        &payer.pubkey(),
        &[],
        amount,
    )?;

    let signature = send_instructions(client, payer, &[mint_to_ix], &[])
        .await
        .map_err(|e| anyhow!("Failed to mint tokens to {}: {}", ata, e))?;

    println!("Minted {} units to {}. Signature: {}", amount, ata, signature);
    Ok(signature)
}
