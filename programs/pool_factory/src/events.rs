use anchor_lang::prelude::*;

use crate::state::PoolParams;

#[event]
pub struct FactoryInitialized {
    pub owner: Pubkey,
    pub fee_collector: Pubkey,
    pub default_params: PoolParams,
}

#[event]
pub struct PoolParamsUpdated {
    pub owner: Pubkey,
    pub params: PoolParams,
}

#[event]
pub struct FeeCollectorUpdated {
    pub previous: Pubkey,
    pub fee_collector: Pubkey,
}

#[event]
pub struct OwnershipProposed {
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
}

#[event]
pub struct OwnershipAccepted {
    pub previous: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct GlobalPauseSet {
    pub owner: Pubkey,
    pub paused: bool,
}
