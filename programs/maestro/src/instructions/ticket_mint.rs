use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::*;
use crate::errors::MaestroError;
use crate::events::{PaymentReceived, TicketsMinted};
use crate::state::{Accountant, Holder, Ticket, TicketLedger};

#[derive(Accounts)]
pub struct MintTickets<'info> {
    /// The buyer paying for and receiving the tickets
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(mut, has_one = accountant)]
    pub ticket_ledger: Account<'info, TicketLedger>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ticket_ledger.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub holder: Account<'info, Holder>,

    /// Receives the full payment
    #[account(mut)]
    pub accountant: Account<'info, Accountant>,

    pub system_program: Program<'info, System>,
}

/// Mint `count` tickets to the buyer for `payment` lamports.
///
/// Remaining accounts: one writable, uninitialized ticket PDA per ticket, in
/// id order starting at the ledger's `next_ticket_id`.
///
/// The payment decides the tier for the whole batch: `count * regular_fee`
/// mints regular tickets, `count * vip_fee` mints VIP tickets.
pub fn mint_tickets<'info>(
    ctx: Context<'_, '_, '_, 'info, MintTickets<'info>>,
    count: u64,
    payment: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ticket_ledger.key();
    let buyer_key = ctx.accounts.buyer.key();

    let ticket_ledger = &mut ctx.accounts.ticket_ledger;
    let holder = &mut ctx.accounts.holder;
    holder.ensure_initialized(ledger_key, buyer_key, ctx.bumps.holder);

    // --- Checks ---
    let tier = ticket_ledger.quote_mint(count, payment, holder.last_mint_at, now)?;
    require!(
        ctx.remaining_accounts.len() as u64 == count,
        MaestroError::TicketAccountMismatch
    );

    // --- Effects ---
    let receipt = ticket_ledger.commit_mint(count, tier)?;
    holder.record_mint(count, now)?;

    for (ticket_id, ticket_info) in (receipt.first_id..).zip(ctx.remaining_accounts.iter()) {
        create_ticket(
            &ctx.accounts.buyer,
            ticket_info,
            &ctx.accounts.system_program,
            &ledger_key,
            ticket_id,
            receipt.event_id,
            tier.is_vip(),
            now,
        )?;
    }

    // --- Interaction: forward the whole payment ---
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.accountant.to_account_info(),
            },
        ),
        payment,
    )?;

    msg!(
        "Minted tickets {}..{} for event {} (vip: {})",
        receipt.first_id,
        receipt.first_id + receipt.count,
        receipt.event_id,
        tier.is_vip()
    );

    emit!(TicketsMinted {
        ticket_ledger: ledger_key,
        buyer: buyer_key,
        first_id: receipt.first_id,
        count: receipt.count,
        event_id: receipt.event_id,
        vip: tier.is_vip(),
        payment,
    });
    emit!(PaymentReceived {
        accountant: ctx.accounts.accountant.key(),
        from: buyer_key,
        amount: payment,
    });

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn create_ticket<'info>(
    buyer: &Signer<'info>,
    ticket_info: &AccountInfo<'info>,
    system: &Program<'info, System>,
    ledger_key: &Pubkey,
    ticket_id: u64,
    event_id: u64,
    vip: bool,
    now: i64,
) -> Result<()> {
    let id_bytes = ticket_id.to_le_bytes();
    let (expected, bump) =
        Pubkey::find_program_address(&[TICKET_SEED, ledger_key.as_ref(), &id_bytes], &crate::ID);
    require_keys_eq!(expected, *ticket_info.key, MaestroError::TicketAccountMismatch);
    require!(ticket_info.data_is_empty(), MaestroError::TicketAccountMismatch);

    let space = 8 + Ticket::INIT_SPACE;
    let rent_minimum = Rent::get()?.minimum_balance(space);
    let bump_seed = [bump];
    let ticket_seeds: &[&[u8]] = &[TICKET_SEED, ledger_key.as_ref(), &id_bytes, &bump_seed];
    let signer_seeds = &[ticket_seeds];

    let current_lamports = ticket_info.lamports();
    if current_lamports == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system.to_account_info(),
                CreateAccount {
                    from: buyer.to_account_info(),
                    to: ticket_info.clone(),
                },
                signer_seeds,
            ),
            rent_minimum,
            space as u64,
            &crate::ID,
        )?;
    } else {
        // Someone pre-funded the address; top it up and claim it in place.
        let shortfall = rent_minimum.saturating_sub(current_lamports);
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.to_account_info(),
                    Transfer {
                        from: buyer.to_account_info(),
                        to: ticket_info.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system.to_account_info(),
                Allocate {
                    account_to_allocate: ticket_info.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system.to_account_info(),
                Assign {
                    account_to_assign: ticket_info.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    let ticket = Ticket {
        ticket_ledger: *ledger_key,
        id: ticket_id,
        owner: buyer.key(),
        event_id,
        vip,
        minted_at: now,
        bump,
    };
    let mut data = ticket_info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    ticket.try_serialize(&mut writer)?;

    Ok(())
}
