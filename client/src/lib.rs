pub mod consts;
pub mod program;
pub mod utils;

pub use utils::*;
