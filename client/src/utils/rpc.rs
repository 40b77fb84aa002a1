use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::consts::*;
use crate::utils::retry;

pub fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| anyhow!("Serialization failed: {}", e))
}

pub fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
    bincode::deserialize(data).map_err(|e| anyhow!("Deserialization failed: {}", e))
}

pub async fn get_latest_blockhash(client: &RpcClient) -> Result<Vec<u8>> {
    let blockhash = client
        .get_latest_blockhash()
        .await
        .map_err(|e| anyhow!("Failed to get latest blockhash: {}", e))?;
    serialize(&blockhash)
}

pub async fn get_account(client: &RpcClient, address: &Pubkey) -> Result<Vec<u8>> {
    let account = client
        .get_account(address)
        .await
        .map_err(|e| anyhow!("Failed to fetch account {}: {}", address, e))?;
    serialize(&account)
}

pub async fn account_exists(client: &RpcClient, address: &Pubkey) -> Result<bool> {
    let response = client
        .get_account_with_commitment(address, client.commitment())
        .await
        .map_err(|e| anyhow!("Failed to fetch account {}: {}", address, e))?;
    Ok(response.value.is_some())
}

pub async fn send_and_confirm_transaction(client: &RpcClient, tx: &Transaction) -> Result<Vec<u8>> {
    // Resending the same signed transaction cannot execute it twice.
    let signature = retry(|| client.send_and_confirm_transaction(tx)).await?;
    serialize(&signature)
}

/// Submits `ixs` under a compute budget. `payer` pays the fee and signs along
/// with `signers`.
pub async fn send_instructions(
    client: &RpcClient,
    payer: &Keypair,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature> {
    let mut all_ixs = vec![ComputeBudgetInstruction::set_compute_unit_limit(COMPUTE_UNIT_LIMIT)];
    all_ixs.extend_from_slice(ixs);

    let mut all_signers = vec![payer];
    all_signers.extend(signers.iter().filter(|s| s.pubkey() != payer.pubkey()));

    let blockhash_bytes = get_latest_blockhash(client).await?;
    let recent_blockhash: Hash = deserialize(&blockhash_bytes)?;
    let tx = Transaction::new_signed_with_payer(
        &all_ixs,
        Some(&payer.pubkey()),
        all_signers.as_slice(),
        recent_blockhash,
    );

    let signature_bytes = send_and_confirm_transaction(client, &tx).await?;
    deserialize(&signature_bytes)
}
