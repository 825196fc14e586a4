pub mod debt_position;
pub mod pool;
pub mod quote;

pub use debt_position::*;
pub use pool::*;
pub use quote::*;
