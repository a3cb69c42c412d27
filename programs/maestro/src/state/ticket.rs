use anchor_lang::prelude::*;

/// A single issued ticket. Everything but `owner` is fixed at mint time.
#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub ticket_ledger: Pubkey,
    pub id: u64,
    pub owner: Pubkey,
    /// Event epoch that was current when the ticket was minted
    pub event_id: u64,
    pub vip: bool,
    pub minted_at: i64,
    pub bump: u8,
}
