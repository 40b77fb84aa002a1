use std::path::PathBuf;
use anyhow::{Result, anyhow};
use solana_sdk::signature::{read_keypair_file, Keypair};

/// `--keypair` if given, else the Solana CLI default `~/.config/solana/id.json`.
pub fn get_keypair_path(keypair: Option<PathBuf>) -> PathBuf {
    keypair.unwrap_or_else(|| {
        let mut path = dirs::home_dir().unwrap_or_default();
        path.push(".config");
        path.push("solana");
        path.push("id.json");
        path
    })
}

pub fn get_payer(path: PathBuf) -> Result<Keypair> {
    read_keypair_file(&path)
        .map_err(|e| anyhow!("Failed to read keypair {}: {}", path.display(), e))
}
