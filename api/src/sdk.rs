use steel::*;
use crate::prelude::*;

pub fn build_initialize_ix(authority: Pubkey) -> Instruction {
    let (storage_pda, storage_bump) = find_payment_storage_pda();

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new(storage_pda, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: InitializeIx::from_struct(
            ParsedInitializeIx {
                bump: storage_bump,
            }
        ).to_bytes(),
    }
}

pub fn build_set_params_ix(
    authority: Pubkey,
    params: ParsedSetParamsIx,
) -> Instruction {
    let (storage_pda, _) = find_payment_storage_pda();

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(storage_pda, false),
        ],
        data: SetParamsIx::from_struct(params).to_bytes(),
    }
}

/// `beneficiary` must be the configured lamport beneficiary.
pub fn build_pay_with_lamports_ix(
    payer: Pubkey,
    beneficiary: Pubkey,
) -> Instruction {
    let (storage_pda, _) = find_payment_storage_pda();

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(storage_pda, false),
            AccountMeta::new(beneficiary, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: PayWithLamportsIx::from_struct(ParsedPayWithLamportsIx {}).to_bytes(),
    }
}

/// `payer` must own (or be the delegate of) `from`; `beneficiary_token` must
/// be the configured beneficiary token account.
pub fn build_pay_with_tokens_ix(
    payer: Pubkey,
    from: Pubkey,
    beneficiary_token: Pubkey,
) -> Instruction {
    let (storage_pda, _) = find_payment_storage_pda();

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new_readonly(payer, true),
            AccountMeta::new(storage_pda, false),
            AccountMeta::new(from, false),
            AccountMeta::new(beneficiary_token, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: PayWithTokensIx::from_struct(ParsedPayWithTokensIx {}).to_bytes(),
    }
}
