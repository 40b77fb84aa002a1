use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};

use crate::utils::{account_exists, send_instructions};

/// Creates `owner`'s associated token account for `mint` unless it exists.
/// Returns the default signature when nothing was sent.
pub async fn create_ata(
    client: &RpcClient,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
    token_program: Option<Pubkey>,
) -> Result<(Pubkey, Signature)> {
    let token_program = token_program.unwrap_or_else(spl_token::id);
    let ata = get_associated_token_address_with_program_id(owner, mint, &token_program);

    if account_exists(client, &ata).await? {
        return Ok((ata, Signature::default()));
    }

    let ix = create_associated_token_account_idempotent(
        &payer.pubkey(),
        owner,
        mint,
        &token_program,
    );

    let signature = send_instructions(client, payer, &[ix], &[])
        .await
        .map_err(|e| anyhow!("Failed to create token account for {}: {}", owner, e))?;

    Ok((ata, signature))
}
