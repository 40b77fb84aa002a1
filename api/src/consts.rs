pub const PAYMENT_STORAGE: &[u8]    = b"payment-storage";

// Presence bits for SetParamsIx::mask
pub const SET_PRICE_LAMPORTS: u8    = 1 << 0;
pub const SET_PRICE_TOKENS: u8      = 1 << 1;
pub const SET_COUNT: u8             = 1 << 2;
pub const SET_MAX_COUNT: u8         = 1 << 3;
pub const SET_BENEFICIARY: u8       = 1 << 4;
pub const SET_BENEFICIARY_TOKEN: u8 = 1 << 5;
pub const SET_AUTHORITY: u8         = 1 << 6;
pub const SET_PARAMS_ALL: u8        = 0b0111_1111;
