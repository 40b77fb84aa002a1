use shank::ShankAccount;
use steel::*;
use super::AccountType;
use crate::error::PaygateError;
use crate::instruction::ParsedSetParamsIx;

/// Payment configuration and sales counter. One per program deployment.
/// PDA seeds: ["payment-storage"]
///
/// Every key starts out as the zero key (the System program id) and every
/// number as zero until the authority configures it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, ShankAccount)]
pub struct PaymentStorage {
    pub authority: Pubkey,          // Can change every field below
    pub beneficiary: Pubkey,        // Receives lamport payments
    pub beneficiary_token: Pubkey,  // Token account receiving token payments

    pub price_lamports: u64,
    pub price_tokens: u64,          // In the token's smallest unit

    pub count: u16,                 // Accepted payments (authority may overwrite)
    pub max_count: u16,             // Payments accepted only while count < max_count

    pub bump: u8,

    _padding: [u8; 3],
}

account!(AccountType, PaymentStorage);

impl PaymentStorage {
    pub const fn get_size() -> usize {
        8 + std::mem::size_of::<Self>()
    }

    pub fn unpack(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::get_size() {
            return Err(ProgramError::InvalidAccountData);
        }
        let data = &data[..Self::get_size()];
        Self::try_from_bytes(data)
    }

    pub fn unpack_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::get_size() {
            return Err(ProgramError::InvalidAccountData);
        }
        let data = &mut data[..Self::get_size()];
        Self::try_from_bytes_mut(data)
    }

    pub fn is_sold_out(&self) -> bool {
        self.count >= self.max_count
    }

    pub fn remaining(&self) -> u16 {
        self.max_count.saturating_sub(self.count)
    }

    pub fn check_authority(&self, signer: &Pubkey) -> Result<(), PaygateError> {
        if self.authority.ne(signer) {
            return Err(PaygateError::Unauthorized);
        }
        Ok(())
    }

    /// Overwrites every provided field verbatim. The authority is trusted, so
    /// nothing is range checked; `count >= max_count` pauses sales.
    pub fn apply_params(&mut self, params: &ParsedSetParamsIx) {
        if let Some(price_lamports) = params.price_lamports {
            self.price_lamports = price_lamports;
        }
        if let Some(price_tokens) = params.price_tokens {
            self.price_tokens = price_tokens;
        }
        if let Some(count) = params.count {
            self.count = count;
        }
        if let Some(max_count) = params.max_count {
            self.max_count = max_count;
        }
        if let Some(beneficiary) = params.beneficiary {
            self.beneficiary = beneficiary;
        }
        if let Some(beneficiary_token) = params.beneficiary_token {
            self.beneficiary_token = beneficiary_token;
        }
        if let Some(new_authority) = params.new_authority {
            self.authority = new_authority;
        }
    }

    pub fn check_lamport_payment(&self, beneficiary: &Pubkey) -> Result<(), PaygateError> {
        self.check_payment(&self.beneficiary, beneficiary)
    }

    pub fn check_token_payment(&self, beneficiary_token: &Pubkey) -> Result<(), PaygateError> {
        self.check_payment(&self.beneficiary_token, beneficiary_token)
    }

    fn check_payment(&self, configured: &Pubkey, declared: &Pubkey) -> Result<(), PaygateError> {
        if self.is_sold_out() {
            return Err(PaygateError::SoldOut);
        }
        if configured.ne(declared) {
            return Err(PaygateError::WrongBeneficiary);
        }
        Ok(())
    }

    /// Counts one accepted payment and returns the new count.
    pub fn record_payment(&mut self) -> Result<u16, ProgramError> {
        self.count = self.count
            .checked_add(1)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(self.count)
    }
}
