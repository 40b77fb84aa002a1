use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::{Keypair, Signature, Signer};
use paygate_api::prelude::*;

use crate::utils::*;

/// Updates the provided fields. `signer` must be the current authority.
pub async fn set_params(
    client: &RpcClient,
    signer: &Keypair,
    params: ParsedSetParamsIx,
) -> Result<Signature> {
    if params.is_empty() {
        return Err(anyhow!("Nothing to update"));
    }

    let (storage, _) = get_payment_storage_account(client).await?;
    if storage.check_authority(&signer.pubkey()).is_err() {
        return Err(anyhow!(
            "{} is not the payment storage authority ({})",
            signer.pubkey(),
            storage.authority
        ));
    }

    let ix = build_set_params_ix(signer.pubkey(), params);
    send_instructions(client, signer, &[ix], &[])
        .await
        .map_err(|e| anyhow!("Failed to set params: {}", e))
}
