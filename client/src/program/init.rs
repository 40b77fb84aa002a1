use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use paygate_api::prelude::*;

use crate::utils::*;

/// Creates the payment storage with `signer` as authority and rent payer.
pub async fn initialize(
    client: &RpcClient,
    signer: &Keypair,
) -> Result<(Signature, Pubkey)> {
    let authority = signer.pubkey();
    let (storage_pda, storage_bump) = find_payment_storage_pda();

    if payment_storage_exists(client, &storage_pda).await? {
        return Err(anyhow!("Payment storage {} is already initialized", storage_pda));
    }

    println!("Initializing payment storage {} (bump {})", storage_pda, storage_bump);

    let ix = build_initialize_ix(authority);
    let signature = send_instructions(client, signer, &[ix], &[])
        .await
        .map_err(|e| anyhow!("Failed to initialize payment storage: {}", e))?;

    Ok((signature, storage_pda))
}
