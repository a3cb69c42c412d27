use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MaestroError;
use crate::events::LedgerInitialized;
use crate::state::{unpack_fee_schedules, Accountant, Bouncer, TicketLedger};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(init, payer = payer, space = 8 + TicketLedger::INIT_SPACE)]
    pub ticket_ledger: Account<'info, TicketLedger>,

    pub accountant: Account<'info, Accountant>,

    pub bouncer: Account<'info, Bouncer>,

    pub system_program: Program<'info, System>,
}

/// Create a ticket collection.
///
/// `packed_fee_schedule` carries the regular fee in its low 64 bits and the
/// VIP fee in its high 64 bits. Stock starts at zero; an authorized caller
/// has to call `set_tickets_left` before anything can be minted.
pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    name: String,
    symbol: String,
    packed_fee_schedule: u128,
    max_mint: u64,
    mint_cooldown: Option<i64>,
) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, MaestroError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, MaestroError::SymbolTooLong);
    let mint_cooldown = mint_cooldown.unwrap_or(MINT_COOLDOWN_SECONDS);
    require!(mint_cooldown >= 0, MaestroError::InvalidCooldown);

    let clock = Clock::get()?;
    let fees = unpack_fee_schedules(packed_fee_schedule);

    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    ticket_ledger.bouncer = ctx.accounts.bouncer.key();
    ticket_ledger.accountant = ctx.accounts.accountant.key();
    ticket_ledger.name = name.clone();
    ticket_ledger.symbol = symbol.clone();
    ticket_ledger.regular_fee = fees.regular;
    ticket_ledger.vip_fee = fees.vip;
    ticket_ledger.max_mint = max_mint;
    ticket_ledger.tickets_left = 0;
    ticket_ledger.current_event = 0;
    ticket_ledger.next_ticket_id = 0;
    ticket_ledger.mint_cooldown = mint_cooldown;
    ticket_ledger.paused = false;
    ticket_ledger.created_at = clock.unix_timestamp;
    ticket_ledger.updated_at = 0;

    emit!(LedgerInitialized {
        ticket_ledger: ticket_ledger.key(),
        accountant: ticket_ledger.accountant,
        bouncer: ticket_ledger.bouncer,
        name,
        symbol,
        regular_fee: fees.regular,
        vip_fee: fees.vip,
        max_mint,
    });

    Ok(())
}
