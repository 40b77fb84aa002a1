#![allow(unexpected_cfgs)]
use steel::*;
use paygate_api::prelude::*;

pub mod instruction;
use instruction::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&paygate_api::ID, program_id, data)?;

    match ix {
        InstructionType::Unknown => return Err(ProgramError::InvalidInstructionData),

        InstructionType::InitializeIx => process_initialize(accounts, data)?,
        InstructionType::SetParamsIx => process_set_params(accounts, data)?,
        InstructionType::PayWithLamportsIx => process_pay_with_lamports(accounts, data)?,
        InstructionType::PayWithTokensIx => process_pay_with_tokens(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
