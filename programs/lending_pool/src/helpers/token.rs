use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::POOL_AUTH_SEED;

/// Signer for the `[b"pool-auth", pool]` PDA that owns the vaults and claim mints.
pub struct PoolAuthority<'a, 'info> {
    pub pool: Pubkey,
    pub bump: u8,
    pub account: &'a UncheckedAccount<'info>,
}

impl PoolAuthority<'_, '_> {
    fn with_seeds<T>(&self, f: impl FnOnce(&[&[&[u8]]]) -> T) -> T {
        let bump = [self.bump];
        let seeds: &[&[u8]] = &[POOL_AUTH_SEED, self.pool.as_ref(), &bump];
        f(&[seeds])
    }
}

/// Moves tokens from a user-owned account into a pool vault.
pub fn transfer_in<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: to.to_account_info(),
        authority: authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}

pub fn transfer_out<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &PoolAuthority<'_, 'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: authority.account.to_account_info(),
    };
    authority.with_seeds(|signer| {
        token::transfer(
            CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
            amount,
        )
    })
}

/// Mints liquidity, bond or insurance tokens signed by the pool authority.
pub fn mint_claims<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    authority: &PoolAuthority<'_, 'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = MintTo {
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: authority.account.to_account_info(),
    };
    authority.with_seeds(|signer| {
        token::mint_to(
            CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
            amount,
        )
    })
}

pub fn burn_from<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Burn {
        mint: mint.to_account_info(),
        from: from.to_account_info(),
        authority: authority.to_account_info(),
    };
    token::burn(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}
