use steel::*;
use crate::consts::*;

/// The one payment storage record of this program.
/// PDA seeds: ["payment-storage"]
pub fn find_payment_storage_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PAYMENT_STORAGE],
        &crate::id(),
    )
}
