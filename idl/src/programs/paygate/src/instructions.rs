use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(mut)]
    pub storage: Account<'info, PaymentStorage>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct SetParams<'info> {
    pub authority: Signer<'info>,
    #[account(mut)]
    pub storage: Account<'info, PaymentStorage>,
}

#[derive(Accounts)]
pub struct PayWithLamports<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(mut)]
    pub storage: Account<'info, PaymentStorage>,
    #[account(mut)]
    pub beneficiary: AccountInfo<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct PayWithTokens<'info> {
    pub payer: Signer<'info>,
    #[account(mut)]
    pub storage: Account<'info, PaymentStorage>,
    #[account(mut)]
    pub payer_token_account: AccountInfo<'info>,
    #[account(mut)]
    pub beneficiary_token_account: AccountInfo<'info>,
    pub token_program: Program<'info, Token>,
}
