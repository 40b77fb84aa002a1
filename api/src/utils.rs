use steel::*;
use solana_program::msg;
use crate::error::PaygateError;

pub fn check_condition(condition: bool, message: &str) -> ProgramResult {
    if !condition {
        msg!("Failed condition: {}", message);
        return Err(ProgramError::InvalidArgument);
    }
    Ok(())
}

pub fn check_signer(account: &AccountInfo) -> ProgramResult {
    account.is_signer()?;
    Ok(())
}

/// A signer whose lamports are debited (rent or payment).
pub fn check_payer(account: &AccountInfo) -> ProgramResult {
    account.is_signer()?.is_writable()?;
    Ok(())
}

pub fn check_mut(account: &AccountInfo) -> ProgramResult {
    account.is_writable()?;
    Ok(())
}

pub fn check_uninitialized_pda(account: &AccountInfo, seeds: &[&[u8]], program_id: &Pubkey) -> ProgramResult {
    account.is_writable()?.has_seeds(seeds, program_id)?;

    if !account.owner.eq(&system_program::ID) || !account.data_is_empty() {
        msg!("Account {} is already initialized", account.key);
        return Err(PaygateError::AlreadyInitialized.into());
    }
    Ok(())
}

pub fn check_seeds(account: &AccountInfo, seeds: &[&[u8]], program_id: &Pubkey) -> ProgramResult {
    account.has_seeds(seeds, program_id)?;
    Ok(())
}

pub fn check_program(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    account.is_program(program_id)?;
    Ok(())
}

pub fn check_sysvar(account: &AccountInfo, sysvar_id: &Pubkey) -> ProgramResult {
    account.is_sysvar(sysvar_id)?;
    Ok(())
}

/// Convert to f64 whole value (e.g., 500_000_000 lamports with 9 decimals -> 0.5)
pub fn to_decimal(amount: u64, decimal_places: u8) -> f64 {
    amount as f64 / 10f64.powi(decimal_places as i32)
}

/// Create from f64 whole value (e.g., 100.0 tokens with 8 decimals -> 10_000_000_000)
pub fn from_decimal(value: f64, decimal_places: u8) -> u64 {
    (value * 10f64.powi(decimal_places as i32)) as u64
}
