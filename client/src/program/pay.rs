use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use spl_associated_token_account::get_associated_token_address;
use paygate_api::prelude::*;

use crate::utils::*;

fn describe(storage: &PaymentStorage, err: PaygateError) -> anyhow::Error {
    match err {
        PaygateError::SoldOut => anyhow!("Sold out ({}/{})", storage.count, storage.max_count),
        err => anyhow!("{}", err),
    }
}

/// Pays the stored lamport price to the configured beneficiary. Returns the
/// signature and the price that was charged.
pub async fn pay_with_lamports(
    client: &RpcClient,
    signer: &Keypair,
) -> Result<(Signature, u64)> {
    let (storage, _) = get_payment_storage_account(client).await?;
    storage
        .check_lamport_payment(&storage.beneficiary)
        .map_err(|e| describe(&storage, e))?;

    println!(
        "Paying {} lamports to {}",
        storage.price_lamports, storage.beneficiary
    );

    let ix = build_pay_with_lamports_ix(signer.pubkey(), storage.beneficiary);
    let signature = send_instructions(client, signer, &[ix], &[])
        .await
        .map_err(|e| anyhow!("Failed to pay with lamports: {}", e))?;

    Ok((signature, storage.price_lamports))
}

/// Pays the stored token price from `signer`'s associated token account for
/// `mint`. Returns the signature and the raw amount that was charged.
pub async fn pay_with_tokens(
    client: &RpcClient,
    signer: &Keypair,
    mint: Pubkey,
) -> Result<(Signature, u64)> {
    let (storage, _) = get_payment_storage_account(client).await?;
    storage
        .check_token_payment(&storage.beneficiary_token)
        .map_err(|e| describe(&storage, e))?;

    let from = get_associated_token_address(&signer.pubkey(), &mint);
    let balance = get_token_balance(client, &from).await?;
    if balance < storage.price_tokens {
        return Err(anyhow!(
            "Token account {} holds {} units, price is {}",
            from,
            balance,
            storage.price_tokens
        ));
    }

    println!(
        "Paying {} token units from {} to {}",
        storage.price_tokens, from, storage.beneficiary_token
    );

    let ix = build_pay_with_tokens_ix(signer.pubkey(), from, storage.beneficiary_token);
    let signature = send_instructions(client, signer, &[ix], &[])
        .await
        .map_err(|e| anyhow!("Failed to pay with tokens: {}", e))?;

    Ok((signature, storage.price_tokens))
}
