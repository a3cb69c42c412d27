use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::FeeSchedules;

declare_id!("BNE7fHTbf3uG8mxbszTsBGnyjjSMrVv54mpd2qYeKyPh");

#[program]
pub mod maestro {
    use super::*;

    pub fn initialize_bouncer(ctx: Context<InitializeBouncer>, initial_admin: Pubkey) -> Result<()> {
        instructions::initialize_bouncer(ctx, initial_admin)
    }

    pub fn set_admin(ctx: Context<UpdateRoles>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin(ctx, new_admin)
    }

    pub fn set_governor(ctx: Context<UpdateRoles>, new_governor: Option<Pubkey>) -> Result<()> {
        instructions::set_governor(ctx, new_governor)
    }

    pub fn is_authorized(ctx: Context<CheckAuthorization>, caller: Pubkey) -> Result<bool> {
        instructions::is_authorized(ctx, caller)
    }

    pub fn initialize_accountant(
        ctx: Context<InitializeAccountant>,
        admin_wallet: Pubkey,
        initial_fund_receiver: Pubkey,
    ) -> Result<()> {
        instructions::initialize_accountant(ctx, admin_wallet, initial_fund_receiver)
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release(ctx)
    }

    pub fn release_to_beneficiary(ctx: Context<ReleaseToBeneficiary>) -> Result<()> {
        instructions::release_to_beneficiary(ctx)
    }

    pub fn set_fund_receiver(ctx: Context<SetFundReceiver>, new_fund_receiver: Pubkey) -> Result<()> {
        instructions::set_fund_receiver(ctx, new_fund_receiver)
    }

    pub fn payee(ctx: Context<AccountantView>, index: u64) -> Result<Pubkey> {
        instructions::payee(ctx, index)
    }

    pub fn shares(ctx: Context<AccountantView>, account: Pubkey) -> Result<u64> {
        instructions::shares(ctx, account)
    }

    pub fn total_shares(ctx: Context<AccountantView>) -> Result<u64> {
        instructions::total_shares(ctx)
    }

    pub fn released(ctx: Context<AccountantView>, account: Pubkey) -> Result<u64> {
        instructions::released(ctx, account)
    }

    pub fn total_released(ctx: Context<AccountantView>) -> Result<u64> {
        instructions::total_released(ctx)
    }

    pub fn total_received(ctx: Context<AccountantView>) -> Result<u64> {
        instructions::total_received(ctx)
    }

    pub fn releasable(ctx: Context<AccountantView>, account: Pubkey) -> Result<u64> {
        instructions::releasable(ctx, account)
    }

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        name: String,
        symbol: String,
        packed_fee_schedule: u128,
        max_mint: u64,
        mint_cooldown: Option<i64>,
    ) -> Result<()> {
        instructions::initialize_ledger(ctx, name, symbol, packed_fee_schedule, max_mint, mint_cooldown)
    }

    pub fn mint_tickets<'info>(
        ctx: Context<'_, '_, '_, 'info, MintTickets<'info>>,
        count: u64,
        payment: u64,
    ) -> Result<()> {
        instructions::mint_tickets(ctx, count, payment)
    }

    pub fn transfer_ticket(ctx: Context<TransferTicket>, ticket_id: u64) -> Result<()> {
        instructions::transfer_ticket(ctx, ticket_id)
    }

    pub fn set_bouncer(ctx: Context<SetBouncer>) -> Result<()> {
        instructions::set_bouncer(ctx)
    }

    pub fn set_mint_fee_schedules(ctx: Context<UpdateLedger>, regular: u64, vip: u64) -> Result<()> {
        instructions::set_mint_fee_schedules(ctx, regular, vip)
    }

    pub fn set_max_mint(ctx: Context<UpdateLedger>, max_mint: u64) -> Result<()> {
        instructions::set_max_mint(ctx, max_mint)
    }

    pub fn set_tickets_left(ctx: Context<UpdateLedger>, tickets_left: u64) -> Result<()> {
        instructions::set_tickets_left(ctx, tickets_left)
    }

    pub fn set_mint_cooldown(ctx: Context<UpdateLedger>, mint_cooldown: i64) -> Result<()> {
        instructions::set_mint_cooldown(ctx, mint_cooldown)
    }

    pub fn set_next_event_id(ctx: Context<UpdateLedger>) -> Result<()> {
        instructions::set_next_event_id(ctx)
    }

    pub fn fee_schedules(ctx: Context<LedgerView>) -> Result<u128> {
        instructions::fee_schedules(ctx)
    }

    pub fn get_mint_fee_schedules(ctx: Context<LedgerView>) -> Result<FeeSchedules> {
        instructions::get_mint_fee_schedules(ctx)
    }

    pub fn get_vip_status(ctx: Context<TicketView>, ticket_id: u64) -> Result<bool> {
        instructions::get_vip_status(ctx, ticket_id)
    }

    pub fn get_event_id(ctx: Context<TicketView>, ticket_id: u64) -> Result<u64> {
        instructions::get_event_id(ctx, ticket_id)
    }

    pub fn owner_of(ctx: Context<TicketView>, ticket_id: u64) -> Result<Pubkey> {
        instructions::owner_of(ctx, ticket_id)
    }

    pub fn balance_of(ctx: Context<HolderView>, owner: Pubkey) -> Result<u64> {
        instructions::balance_of(ctx, owner)
    }
}
