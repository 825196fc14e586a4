pub mod borrow;
pub mod burn_liquidity;
pub mod burn_matured_liquidity;
pub mod create_pool;
pub mod lend;
pub mod mint_liquidity;
pub mod pay;

pub use borrow::*;
pub use burn_liquidity::*;
pub use burn_matured_liquidity::*;
pub use create_pool::*;
pub use lend::*;
pub use mint_liquidity::*;
pub use pay::*;
