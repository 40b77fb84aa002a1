pub mod init;
pub mod params;
pub mod pay;

pub use init::*;
pub use params::*;
pub use pay::*;
