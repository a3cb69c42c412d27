use anchor_lang::prelude::*;

use crate::errors::MaestroError;
use crate::events::FundReceiverUpdated;
use crate::state::{Accountant, Bouncer};

#[derive(Accounts)]
pub struct SetFundReceiver<'info> {
    pub authority: Signer<'info>,

    #[account(mut, has_one = bouncer @ MaestroError::InvalidBouncer)]
    pub accountant: Account<'info, Accountant>,

    #[account(constraint = bouncer.is_admin(authority.key) @ MaestroError::Unauthorized)]
    pub bouncer: Account<'info, Bouncer>,
}

/// Redirect the beneficiary slot's payouts. The slot's shares and release
/// history stay with the slot, so the new receiver picks up exactly the
/// unclaimed balance.
pub fn set_fund_receiver(ctx: Context<SetFundReceiver>, new_fund_receiver: Pubkey) -> Result<()> {
    let accountant = &mut ctx.accounts.accountant;
    let previous = accountant.set_fund_receiver(new_fund_receiver);

    msg!("Fund receiver changed from {:?} to {:?}", previous, new_fund_receiver);
    emit!(FundReceiverUpdated {
        accountant: accountant.key(),
        previous,
        current: new_fund_receiver,
    });

    Ok(())
}
