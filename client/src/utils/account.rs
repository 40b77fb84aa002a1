use anyhow::{Result, anyhow};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, account::Account};
use paygate_api::prelude::*;
use crate::utils::{deserialize, get_account};

pub async fn get_payment_storage_account(client: &RpcClient) -> Result<(PaymentStorage, Pubkey)> {
    let (address, _) = find_payment_storage_pda();
    let storage = fetch_payment_storage(client, &address).await?;
    Ok((storage, address))
}

/// Reads the payment storage at `address` without deriving it.
pub async fn fetch_payment_storage(client: &RpcClient, address: &Pubkey) -> Result<PaymentStorage> {
    let account_bytes = get_account(client, address).await?;
    let account: Account = deserialize(&account_bytes)?;

    if !is_payment_storage(&account) {
        return Err(anyhow!("Payment storage {} is not initialized", address));
    }

    let storage = PaymentStorage::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack payment storage account: {}", e))
        .copied()?;
    Ok(storage)
}

/// The storage counts as created once the program owns it. Lamports sent to
/// the address beforehand leave it with the System program.
pub fn is_payment_storage(account: &Account) -> bool {
    account.owner == paygate_api::ID
}

pub async fn payment_storage_exists(client: &RpcClient, address: &Pubkey) -> Result<bool> {
    let response = client
        .get_account_with_commitment(address, client.commitment())
        .await
        .map_err(|e| anyhow!("Failed to fetch account {}: {}", address, e))?;
    Ok(response.value.as_ref().is_some_and(is_payment_storage))
}

/// Raw token amount held by a token account.
pub async fn get_token_balance(client: &RpcClient, token_account: &Pubkey) -> Result<u64> {
    let balance = client
        .get_token_account_balance(token_account)
        .await
        .map_err(|e| anyhow!("Failed to fetch token balance of {}: {}", token_account, e))?;
    balance.amount
        .parse()
        .map_err(|e| anyhow!("Invalid token amount {}: {}", balance.amount, e))
}
