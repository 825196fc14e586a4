use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::FactoryConfig};

pub fn require_owner(authority: &Signer<'_>, config: &Account<FactoryConfig>) -> Result<()> {
    require_keys_eq!(authority.key(), config.owner, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_fee_collector(fee_collector: Pubkey) -> Result<()> {
    require_keys_neq!(
        fee_collector,
        Pubkey::default(),
        ErrorCode::InvalidFeeCollector
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_not_a_fee_collector() {
        assert!(require_fee_collector(Pubkey::default()).is_err());
        assert!(require_fee_collector(Pubkey::new_unique()).is_ok());
    }
}
