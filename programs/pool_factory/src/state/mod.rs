pub mod factory_config;
pub mod types;

pub use factory_config::*;
pub use types::*;
