pub const MAX_RETRIES: u32        = 30;
pub const RETRY_DELAY_MS: u64     = 500;

pub const COMPUTE_UNIT_LIMIT: u32 = 50_000;

pub const TOKEN_DECIMALS: u8      = 8;
pub const LAMPORTS_DECIMALS: u8   = 9;
