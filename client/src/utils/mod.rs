mod account;
mod rpc;
mod retry;
mod ata;
mod mint;

pub use account::*;
pub use rpc::*;
pub use retry::*;
pub use ata::*;
pub use mint::*;
