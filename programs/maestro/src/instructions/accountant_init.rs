use anchor_lang::prelude::*;

use crate::events::AccountantInitialized;
use crate::state::{Accountant, Bouncer};

#[derive(Accounts)]
pub struct InitializeAccountant<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(init, payer = payer, space = 8 + Accountant::INIT_SPACE)]
    pub accountant: Account<'info, Accountant>,

    pub bouncer: Account<'info, Bouncer>,

    pub system_program: Program<'info, System>,
}

/// Create a revenue splitter with a 75/25 split between the admin wallet and
/// the beneficiary slot, paying the latter out to `initial_fund_receiver`.
pub fn initialize_accountant(
    ctx: Context<InitializeAccountant>,
    admin_wallet: Pubkey,
    initial_fund_receiver: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let bouncer_key = ctx.accounts.bouncer.key();
    let accountant = &mut ctx.accounts.accountant;

    accountant.set_inner(Accountant::new(
        bouncer_key,
        admin_wallet,
        initial_fund_receiver,
        clock.unix_timestamp,
    ));

    emit!(AccountantInitialized {
        accountant: accountant.key(),
        bouncer: bouncer_key,
        admin_wallet,
        fund_receiver: initial_fund_receiver,
        total_shares: accountant.total_shares,
    });

    Ok(())
}
