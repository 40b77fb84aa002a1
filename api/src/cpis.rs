use solana_program::system_instruction;
use steel::*;

/// Moves `amount` lamports between two system accounts. `from` must sign.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> ProgramResult {
    solana_program::program::invoke(
        &system_instruction::transfer(
            from.key,
            to.key,
            amount,
        ),
        &[
            from.clone(),
            to.clone(),
            system_program.clone(),
        ],
    )
}
