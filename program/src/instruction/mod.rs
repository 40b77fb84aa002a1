pub mod initialize;
pub mod params;
pub mod pay_lamports;
pub mod pay_tokens;

pub use initialize::*;
pub use params::*;
pub use pay_lamports::*;
pub use pay_tokens::*;
