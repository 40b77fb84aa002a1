mod svm;
mod token;
mod print;

pub use svm::*;
pub use token::*;
pub use print::*;
