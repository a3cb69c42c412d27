use anchor_lang::prelude::*;

use crate::errors::MaestroError;
use crate::events::{BouncerUpdated, EventAdvanced, LedgerUpdated};
use crate::state::{Bouncer, TicketLedger};

#[derive(Accounts)]
pub struct UpdateLedger<'info> {
    pub authority: Signer<'info>,

    #[account(mut, has_one = bouncer @ MaestroError::InvalidBouncer)]
    pub ticket_ledger: Account<'info, TicketLedger>,

    #[account(constraint = bouncer.is_authorized(authority.key) @ MaestroError::Unauthorized)]
    pub bouncer: Account<'info, Bouncer>,
}

#[derive(Accounts)]
pub struct SetBouncer<'info> {
    pub authority: Signer<'info>,

    #[account(mut, has_one = bouncer @ MaestroError::InvalidBouncer)]
    pub ticket_ledger: Account<'info, TicketLedger>,

    #[account(constraint = bouncer.is_authorized(authority.key) @ MaestroError::Unauthorized)]
    pub bouncer: Account<'info, Bouncer>,

    pub new_bouncer: Account<'info, Bouncer>,
}

pub fn set_bouncer(ctx: Context<SetBouncer>) -> Result<()> {
    let current = ctx.accounts.new_bouncer.key();
    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    let previous = std::mem::replace(&mut ticket_ledger.bouncer, current);
    ticket_ledger.updated_at = Clock::get()?.unix_timestamp;

    msg!("Bouncer replaced: {:?} -> {:?}", previous, current);
    emit!(BouncerUpdated {
        ticket_ledger: ticket_ledger.key(),
        previous,
        current,
    });

    Ok(())
}

pub fn set_mint_fee_schedules(ctx: Context<UpdateLedger>, regular: u64, vip: u64) -> Result<()> {
    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    ticket_ledger.set_fee_schedules(regular, vip);
    touch(ticket_ledger, ctx.accounts.authority.key())
}

pub fn set_max_mint(ctx: Context<UpdateLedger>, max_mint: u64) -> Result<()> {
    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    ticket_ledger.max_mint = max_mint;
    touch(ticket_ledger, ctx.accounts.authority.key())
}

pub fn set_tickets_left(ctx: Context<UpdateLedger>, tickets_left: u64) -> Result<()> {
    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    ticket_ledger.tickets_left = tickets_left;
    touch(ticket_ledger, ctx.accounts.authority.key())
}

pub fn set_mint_cooldown(ctx: Context<UpdateLedger>, mint_cooldown: i64) -> Result<()> {
    require!(mint_cooldown >= 0, MaestroError::InvalidCooldown);
    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    ticket_ledger.mint_cooldown = mint_cooldown;
    touch(ticket_ledger, ctx.accounts.authority.key())
}

/// Start the next event. Tickets minted from now on carry the new id.
pub fn set_next_event_id(ctx: Context<UpdateLedger>) -> Result<()> {
    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    let event_id = ticket_ledger.advance_event()?;
    ticket_ledger.updated_at = Clock::get()?.unix_timestamp;

    msg!("Event {} started", event_id);
    emit!(EventAdvanced {
        ticket_ledger: ticket_ledger.key(),
        event_id,
    });

    Ok(())
}

fn touch(ticket_ledger: &mut Account<TicketLedger>, authority: Pubkey) -> Result<()> {
    ticket_ledger.updated_at = Clock::get()?.unix_timestamp;

    emit!(LedgerUpdated {
        ticket_ledger: ticket_ledger.key(),
        authority,
        regular_fee: ticket_ledger.regular_fee,
        vip_fee: ticket_ledger.vip_fee,
        max_mint: ticket_ledger.max_mint,
        tickets_left: ticket_ledger.tickets_left,
        mint_cooldown: ticket_ledger.mint_cooldown,
    });

    Ok(())
}
