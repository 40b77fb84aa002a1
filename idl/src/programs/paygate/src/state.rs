use anchor_lang::prelude::*;

#[account]
#[repr(C, align(8))]
#[derive(Copy, Debug, PartialEq)]
pub struct PaymentStorage {
    pub authority: Pubkey,
    pub beneficiary: Pubkey,
    pub beneficiary_token: Pubkey,
    pub price_lamports: u64,
    pub price_tokens: u64,
    pub count: u16,
    pub max_count: u16,
    pub bump: u8,
    pub padding: [u8; 3],
}
