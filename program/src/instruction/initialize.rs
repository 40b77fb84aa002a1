use steel::*;
use paygate_api::prelude::*;

pub fn process_initialize(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let raw_args = InitializeIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    let [
        authority_info,
        storage_info,

        system_program_info,
        rent_sysvar_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    solana_program::msg!("Args: {:?}", args);

    check_payer(authority_info)?;
    check_mut(storage_info)?;

    check_program(system_program_info, &system_program::id())?;
    check_sysvar(rent_sysvar_info, &sysvar::rent::id())?;

    check_uninitialized_pda(
        storage_info,
        &[ PAYMENT_STORAGE ],
        &paygate_api::id()
    )?;

    let (_, storage_bump) = find_payment_storage_pda();
    check_condition(
        args.bump == storage_bump,
        "Payment storage bump is not canonical"
    )?;

    create_program_account_with_bump::<PaymentStorage>(
        storage_info,
        system_program_info,
        authority_info,
        &paygate_api::ID,
        &[ PAYMENT_STORAGE ],
        args.bump,
    )?;

    let storage = storage_info.as_account_mut::<PaymentStorage>(&paygate_api::ID)?;

    // Prices, beneficiaries and counters stay zeroed until set_params.
    storage.authority = *authority_info.key;
    storage.bump = args.bump;

    solana_program::msg!("Payment storage authority: {}", storage.authority);

    Ok(())
}
