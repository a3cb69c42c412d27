use anchor_lang::prelude::*;

#[event]
pub struct BouncerInitialized {
    pub bouncer: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct RoleUpdated {
    pub bouncer: Pubkey,
    pub admin: Pubkey,
    pub governor: Option<Pubkey>,
}

#[event]
pub struct AccountantInitialized {
    pub accountant: Pubkey,
    pub bouncer: Pubkey,
    pub admin_wallet: Pubkey,
    pub fund_receiver: Pubkey,
    pub total_shares: u64,
}

#[event]
pub struct PaymentReceived {
    pub accountant: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PaymentReleased {
    pub accountant: Pubkey,
    pub slot_key: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FundReceiverUpdated {
    pub accountant: Pubkey,
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
pub struct LedgerInitialized {
    pub ticket_ledger: Pubkey,
    pub accountant: Pubkey,
    pub bouncer: Pubkey,
    pub name: String,
    pub symbol: String,
    pub regular_fee: u64,
    pub vip_fee: u64,
    pub max_mint: u64,
}

#[event]
pub struct LedgerUpdated {
    pub ticket_ledger: Pubkey,
    pub authority: Pubkey,
    pub regular_fee: u64,
    pub vip_fee: u64,
    pub max_mint: u64,
    pub tickets_left: u64,
    pub mint_cooldown: i64,
}

#[event]
pub struct BouncerUpdated {
    pub ticket_ledger: Pubkey,
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
pub struct EventAdvanced {
    pub ticket_ledger: Pubkey,
    pub event_id: u64,
}

#[event]
pub struct TicketsMinted {
    pub ticket_ledger: Pubkey,
    pub buyer: Pubkey,
    pub first_id: u64,
    pub count: u64,
    pub event_id: u64,
    pub vip: bool,
    pub payment: u64,
}

#[event]
pub struct TicketTransferred {
    pub ticket_ledger: Pubkey,
    pub ticket_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}
