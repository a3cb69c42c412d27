use anchor_lang::prelude::*;

use crate::events::RoleUpdated;
use crate::state::Bouncer;

#[derive(Accounts)]
pub struct UpdateRoles<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub bouncer: Account<'info, Bouncer>,
}

#[derive(Accounts)]
pub struct CheckAuthorization<'info> {
    pub bouncer: Account<'info, Bouncer>,
}

pub fn set_admin(ctx: Context<UpdateRoles>, new_admin: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let bouncer = &mut ctx.accounts.bouncer;

    bouncer.set_admin(&authority, new_admin)?;
    bouncer.updated_at = Clock::get()?.unix_timestamp;

    msg!("Admin handed over to {:?}", new_admin);
    emit_roles(bouncer)
}

pub fn set_governor(ctx: Context<UpdateRoles>, new_governor: Option<Pubkey>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let bouncer = &mut ctx.accounts.bouncer;

    bouncer.set_governor(&authority, new_governor)?;
    bouncer.updated_at = Clock::get()?.unix_timestamp;

    emit_roles(bouncer)
}

pub fn is_authorized(ctx: Context<CheckAuthorization>, caller: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.bouncer.is_authorized(&caller))
}

fn emit_roles(bouncer: &Account<Bouncer>) -> Result<()> {
    emit!(RoleUpdated {
        bouncer: bouncer.key(),
        admin: bouncer.admin,
        governor: bouncer.governor,
    });
    Ok(())
}
