use steel::*;
use paygate_api::prelude::*;

pub fn process_set_params(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let raw_args = SetParamsIx::try_from_bytes(data)?;
    let args = raw_args.to_struct()?;

    let [
        authority_info,
        storage_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    solana_program::msg!("Args: {:?}", args);

    check_signer(authority_info)?;
    check_mut(storage_info)?;
    check_seeds(storage_info, &[ PAYMENT_STORAGE ], &paygate_api::id())?;

    let storage = storage_info.as_account_mut::<PaymentStorage>(&paygate_api::ID)?;

    if let Err(err) = storage.check_authority(authority_info.key) {
        solana_program::msg!("{} is not the authority {}", authority_info.key, storage.authority);
        return Err(err.into());
    }

    storage.apply_params(&args);

    solana_program::msg!(
        "Price: {} lamports, {} tokens. Count: {}/{}",
        storage.price_lamports,
        storage.price_tokens,
        storage.count,
        storage.max_count
    );
    solana_program::msg!(
        "Beneficiary: {}, token: {}. Authority: {}",
        storage.beneficiary,
        storage.beneficiary_token,
        storage.authority
    );

    Ok(())
}
