use steel::*;
use paygate_api::prelude::*;

pub fn process_pay_with_lamports(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    PayWithLamportsIx::try_from_bytes(data)?;

    let [
        payer_info,
        storage_info,
        beneficiary_info,
        system_program_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    // Basic checks
    check_payer(payer_info)?;
    check_mut(storage_info)?;
    check_mut(beneficiary_info)?;
    check_program(system_program_info, &system_program::id())?;
    check_seeds(storage_info, &[ PAYMENT_STORAGE ], &paygate_api::id())?;

    let storage = storage_info.as_account_mut::<PaymentStorage>(&paygate_api::ID)?;

    storage.check_lamport_payment(beneficiary_info.key)?;

    // The amount always comes from storage, never from the caller.
    solana_program::msg!(
        "Transfer {} lamports to {}",
        storage.price_lamports,
        storage.beneficiary
    );

    transfer_lamports(
        payer_info,
        beneficiary_info,
        system_program_info,
        storage.price_lamports,
    )?;

    let count = storage.record_payment()?;

    solana_program::msg!("Paid for mint [{}:{}]", payer_info.key, count);

    Ok(())
}
