mod storage;

pub use storage::*;

use steel::*;

/// Discriminator for Paygate program accounts.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum AccountType {
    Unknown = 0,
    PaymentStorage,
}
