pub mod accept_owner;
pub mod initialize_factory;
pub mod set_fee_collector;
pub mod set_global_pause;
pub mod set_pending_owner;
pub mod update_pool_params;

pub use accept_owner::*;
pub use initialize_factory::*;
pub use set_fee_collector::*;
pub use set_global_pause::*;
pub use set_pending_owner::*;
pub use update_pool_params::*;
