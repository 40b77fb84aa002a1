use steel::*;
use paygate_api::prelude::*;

pub fn process_pay_with_tokens(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    PayWithTokensIx::try_from_bytes(data)?;

    let [
        payer_info,
        storage_info,
        from_info,
        beneficiary_token_info,
        token_program_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    // Basic checks
    check_signer(payer_info)?;
    check_mut(storage_info)?;
    check_mut(from_info)?;
    check_mut(beneficiary_token_info)?;
    check_program(token_program_info, &spl_token::id())?;
    check_seeds(storage_info, &[ PAYMENT_STORAGE ], &paygate_api::id())?;

    let storage = storage_info.as_account_mut::<PaymentStorage>(&paygate_api::ID)?;

    storage.check_token_payment(beneficiary_token_info.key)?;

    let from_mint = from_info.as_token_account()?.mint();
    beneficiary_token_info.as_token_account()?
        .assert(|t| t.mint().eq(&from_mint))?;

    solana_program::msg!(
        "Transfer {} tokens of {} to {}",
        storage.price_tokens,
        from_mint,
        storage.beneficiary_token
    );

    transfer(
        payer_info,
        from_info,
        beneficiary_token_info,
        token_program_info,
        storage.price_tokens,
    )?;

    let count = storage.record_payment()?;

    solana_program::msg!("Paid for mint [{}:{}]", payer_info.key, count);

    Ok(())
}
