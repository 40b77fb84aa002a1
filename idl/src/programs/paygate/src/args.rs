use anchor_lang::prelude::*;

#[repr(C)]
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Debug)]
pub struct InitializeArgs {
    pub bump: u8,
}

/// Bit `n` of `mask` marks the n-th field below as provided:
/// price_lamports, price_tokens, count, max_count, beneficiary,
/// beneficiary_token, new_authority.
#[repr(C)]
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Debug)]
pub struct SetParamsArgs {
    pub mask: u8,
    pub price_lamports: u64,
    pub price_tokens: u64,
    pub count: u16,
    pub max_count: u16,
    pub beneficiary: Pubkey,
    pub beneficiary_token: Pubkey,
    pub new_authority: Pubkey,
}
