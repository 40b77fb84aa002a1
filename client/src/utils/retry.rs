use std::future::Future;
use std::time::Duration;
use anyhow::{Result, anyhow};
use solana_client::client_error::ClientError;

use crate::consts::*;

/// Retries transport failures. A transaction the cluster rejected (program
/// error, expired blockhash, ...) is returned at once.
pub async fn retry<F, Fut, T>(mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.get_transaction_error().is_some() => {
                return Err(anyhow!("Transaction rejected: {}", e));
            }
            Err(e) if attempt >= MAX_RETRIES => {
                return Err(anyhow!("Giving up after {} attempts: {}", attempt, e));
            }
            Err(e) => {
                println!("Attempt {} failed: {}. Retrying...", attempt, e);
                attempt += 1;
                tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
            }
        }
    }
}
