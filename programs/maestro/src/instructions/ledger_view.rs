use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MaestroError;
use crate::state::{FeeSchedules, Holder, Ticket, TicketLedger};

#[derive(Accounts)]
pub struct LedgerView<'info> {
    pub ticket_ledger: Account<'info, TicketLedger>,
}

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct TicketView<'info> {
    pub ticket_ledger: Account<'info, TicketLedger>,

    /// CHECK: may not exist yet; address is pinned by seeds and contents are
    /// only read after the ledger confirms the id was minted
    #[account(seeds = [TICKET_SEED, ticket_ledger.key().as_ref(), &ticket_id.to_le_bytes()], bump)]
    pub ticket: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct HolderView<'info> {
    pub ticket_ledger: Account<'info, TicketLedger>,

    /// CHECK: absent for wallets that never held a ticket
    #[account(seeds = [HOLDER_SEED, ticket_ledger.key().as_ref(), owner.as_ref()], bump)]
    pub holder: UncheckedAccount<'info>,
}

pub fn fee_schedules(ctx: Context<LedgerView>) -> Result<u128> {
    Ok(ctx.accounts.ticket_ledger.fee_schedules())
}

pub fn get_mint_fee_schedules(ctx: Context<LedgerView>) -> Result<FeeSchedules> {
    Ok(ctx.accounts.ticket_ledger.mint_fee_schedules())
}

pub fn get_vip_status(ctx: Context<TicketView>, ticket_id: u64) -> Result<bool> {
    Ok(load_ticket(&ctx.accounts.ticket_ledger, &ctx.accounts.ticket, ticket_id)?.vip)
}

pub fn get_event_id(ctx: Context<TicketView>, ticket_id: u64) -> Result<u64> {
    Ok(load_ticket(&ctx.accounts.ticket_ledger, &ctx.accounts.ticket, ticket_id)?.event_id)
}

pub fn owner_of(ctx: Context<TicketView>, ticket_id: u64) -> Result<Pubkey> {
    Ok(load_ticket(&ctx.accounts.ticket_ledger, &ctx.accounts.ticket, ticket_id)?.owner)
}

pub fn balance_of(ctx: Context<HolderView>, _owner: Pubkey) -> Result<u64> {
    let holder = &ctx.accounts.holder;
    if holder.data_is_empty() || *holder.owner != crate::ID {
        return Ok(0);
    }
    let data = holder.try_borrow_data()?;
    Ok(Holder::try_deserialize(&mut &data[..])?.balance)
}

fn load_ticket(
    ticket_ledger: &TicketLedger,
    ticket: &UncheckedAccount,
    ticket_id: u64,
) -> Result<Ticket> {
    require!(ticket_ledger.ticket_exists(ticket_id), MaestroError::NonexistentToken);
    require!(
        !ticket.data_is_empty() && *ticket.owner == crate::ID,
        MaestroError::NonexistentToken
    );
    let data = ticket.try_borrow_data()?;
    Ticket::try_deserialize(&mut &data[..])
}
