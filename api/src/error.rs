use steel::*;

/// Custom error codes returned by the Paygate program as `ProgramError::Custom`.
#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
pub enum PaygateError {
    #[error("Payment storage is already initialized")]
    AlreadyInitialized = 0,

    #[error("Signer is not the payment storage authority")]
    Unauthorized = 1,

    #[error("No slots left: count has reached max count")]
    SoldOut = 2,

    #[error("Beneficiary does not match the configured beneficiary")]
    WrongBeneficiary = 3,
}

error!(PaygateError);
