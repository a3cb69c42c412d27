use anchor_lang::prelude::*;

pub const TICKET_SEED: &[u8] = b"ticket";
pub const HOLDER_SEED: &[u8] = b"holder";

/// Number of entries in the accountant's payee table.
pub const PAYEE_COUNT: usize = 2;
pub const ADMIN_SHARES: u64 = 75;
pub const BENEFICIARY_SHARES: u64 = 25;
pub const TOTAL_SHARES: u64 = ADMIN_SHARES + BENEFICIARY_SHARES;

/// Accounting key of the beneficiary slot. Payouts for this slot go to the
/// accountant's current `fund_receiver`, never to this key.
pub const BENEFICIARY_SLOT_KEY: Pubkey = {
    let mut bytes = [0u8; 32];
    bytes[30] = 0xFE;
    bytes[31] = 0xED;
    Pubkey::new_from_array(bytes)
};

pub const MINT_COOLDOWN_SECONDS: i64 = 3600; // 1 hour

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Regular fee occupies the low half of a packed fee schedule, VIP the high half.
pub const FEE_SCHEDULE_SHIFT: u32 = 64;
