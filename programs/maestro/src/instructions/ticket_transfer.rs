use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MaestroError;
use crate::events::TicketTransferred;
use crate::state::{Holder, Ticket, TicketLedger};

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct TransferTicket<'info> {
    /// Current owner of the ticket
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: any wallet can receive a ticket
    pub recipient: UncheckedAccount<'info>,

    pub ticket_ledger: Account<'info, TicketLedger>,

    #[account(
        mut,
        seeds = [TICKET_SEED, ticket_ledger.key().as_ref(), &ticket_id.to_le_bytes()],
        bump = ticket.bump,
        has_one = owner @ MaestroError::NotTicketOwner,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ticket_ledger.key().as_ref(), owner.key().as_ref()],
        bump = sender_holder.bump,
    )]
    pub sender_holder: Account<'info, Holder>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ticket_ledger.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub recipient_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

/// Hand a ticket to another wallet. Only ownership moves; the event id and
/// tier stay as minted.
pub fn transfer_ticket(ctx: Context<TransferTicket>, ticket_id: u64) -> Result<()> {
    let from = ctx.accounts.owner.key();
    let to = ctx.accounts.recipient.key();
    require_keys_neq!(from, to, MaestroError::SelfTransfer);

    let ledger_key = ctx.accounts.ticket_ledger.key();
    ctx.accounts
        .recipient_holder
        .ensure_initialized(ledger_key, to, ctx.bumps.recipient_holder);

    ctx.accounts.sender_holder.debit(1)?;
    ctx.accounts.recipient_holder.credit(1)?;
    ctx.accounts.ticket.owner = to;

    msg!("Ticket {} transferred: {:?} -> {:?}", ticket_id, from, to);
    emit!(TicketTransferred {
        ticket_ledger: ledger_key,
        ticket_id,
        from,
        to,
    });

    Ok(())
}
