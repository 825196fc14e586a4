pub mod guard;
pub mod math;
pub mod token;

pub use guard::*;
pub use token::*;
