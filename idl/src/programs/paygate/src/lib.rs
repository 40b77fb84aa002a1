use anchor_lang::prelude::*;

mod state;
mod args;
mod instructions;

use args::*;
use instructions::*;

declare_id!("deepDCigiqV6vbvjbXQRvYsQGcWc7ynVgVo3qBAj2DJ");

#[program]
pub mod paygate {
    use super::*;

    pub fn initialize(_ctx: Context<Initialize>, _data: InitializeArgs) -> Result<()> {
        Ok(())
    }

    pub fn set_params(_ctx: Context<SetParams>, _data: SetParamsArgs) -> Result<()> {
        Ok(())
    }

    pub fn pay_with_lamports(_ctx: Context<PayWithLamports>) -> Result<()> {
        Ok(())
    }

    pub fn pay_with_tokens(_ctx: Context<PayWithTokens>) -> Result<()> {
        Ok(())
    }
}
