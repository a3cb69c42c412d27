use anchor_lang::prelude::*;

use crate::events::BouncerInitialized;
use crate::state::Bouncer;

#[derive(Accounts)]
pub struct InitializeBouncer<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(init, payer = payer, space = 8 + Bouncer::INIT_SPACE)]
    pub bouncer: Account<'info, Bouncer>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_bouncer(ctx: Context<InitializeBouncer>, initial_admin: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let bouncer = &mut ctx.accounts.bouncer;
    bouncer.set_inner(Bouncer::new(initial_admin, clock.unix_timestamp));

    emit!(BouncerInitialized {
        bouncer: bouncer.key(),
        admin: initial_admin,
    });

    Ok(())
}
