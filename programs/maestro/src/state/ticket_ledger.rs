use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MaestroError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeTier {
    Regular,
    Vip,
}

impl FeeTier {
    pub fn is_vip(&self) -> bool {
        matches!(self, FeeTier::Vip)
    }
}

/// Fee pair as returned to clients.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSchedules {
    pub regular: u64,
    pub vip: u64,
}

pub fn pack_fee_schedules(regular: u64, vip: u64) -> u128 {
    ((vip as u128) << FEE_SCHEDULE_SHIFT) | regular as u128
}

pub fn unpack_fee_schedules(packed: u128) -> FeeSchedules {
    FeeSchedules {
        regular: packed as u64,
        vip: (packed >> FEE_SCHEDULE_SHIFT) as u64,
    }
}

/// Outcome of a committed mint: ids `first_id..first_id + count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub first_id: u64,
    pub count: u64,
    pub event_id: u64,
    pub tier: FeeTier,
}

#[account]
#[derive(InitSpace)]
pub struct TicketLedger {
    pub bouncer: Pubkey,
    pub accountant: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    pub regular_fee: u64,
    pub vip_fee: u64,
    pub max_mint: u64,
    pub tickets_left: u64,
    pub current_event: u64,
    pub next_ticket_id: u64,
    pub mint_cooldown: i64,
    /// Reserved. Nothing sets it after initialization.
    pub paused: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TicketLedger {
    pub fn fee_schedules(&self) -> u128 {
        pack_fee_schedules(self.regular_fee, self.vip_fee)
    }

    pub fn mint_fee_schedules(&self) -> FeeSchedules {
        FeeSchedules {
            regular: self.regular_fee,
            vip: self.vip_fee,
        }
    }

    pub fn set_fee_schedules(&mut self, regular: u64, vip: u64) {
        self.regular_fee = regular;
        self.vip_fee = vip;
    }

    pub fn ticket_exists(&self, ticket_id: u64) -> bool {
        ticket_id < self.next_ticket_id
    }

    /// Exact-match tier lookup. Regular wins when both fees are equal.
    pub fn price_tier(&self, count: u64, payment: u64) -> std::result::Result<FeeTier, MaestroError> {
        if payment == 0 {
            return Err(MaestroError::InvalidPayment);
        }
        // an overflowing total can never equal a u64 payment
        if count.checked_mul(self.regular_fee) == Some(payment) {
            return Ok(FeeTier::Regular);
        }
        if count.checked_mul(self.vip_fee) == Some(payment) {
            return Ok(FeeTier::Vip);
        }
        Err(MaestroError::InvalidPayment)
    }

    pub fn check_cooldown(
        &self,
        last_mint_at: Option<i64>,
        now: i64,
    ) -> std::result::Result<(), MaestroError> {
        match last_mint_at {
            Some(last) if now.saturating_sub(last) < self.mint_cooldown => {
                Err(MaestroError::RateLimited)
            }
            _ => Ok(()),
        }
    }

    /// Runs every mint check in order without touching state.
    pub fn quote_mint(
        &self,
        count: u64,
        payment: u64,
        last_mint_at: Option<i64>,
        now: i64,
    ) -> std::result::Result<FeeTier, MaestroError> {
        if self.paused {
            return Err(MaestroError::MintingPaused);
        }
        if count > self.tickets_left {
            return Err(MaestroError::OutOfStock);
        }
        if count > self.max_mint {
            return Err(MaestroError::TooManyRequested);
        }
        self.check_cooldown(last_mint_at, now)?;
        self.price_tier(count, payment)
    }

    /// Takes `count` tickets out of stock and allocates their ids.
    pub fn commit_mint(
        &mut self,
        count: u64,
        tier: FeeTier,
    ) -> std::result::Result<MintReceipt, MaestroError> {
        let tickets_left = self
            .tickets_left
            .checked_sub(count)
            .ok_or(MaestroError::OutOfStock)?;
        let first_id = self.next_ticket_id;
        let next_ticket_id = first_id
            .checked_add(count)
            .ok_or(MaestroError::MathOverflow)?;

        self.tickets_left = tickets_left;
        self.next_ticket_id = next_ticket_id;

        Ok(MintReceipt {
            first_id,
            count,
            event_id: self.current_event,
            tier,
        })
    }

    pub fn advance_event(&mut self) -> std::result::Result<u64, MaestroError> {
        self.current_event = self
            .current_event
            .checked_add(1)
            .ok_or(MaestroError::MathOverflow)?;
        Ok(self.current_event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REG_FEE: u64 = 100_000_000;
    const VIP_FEE: u64 = 150_000_000;

    fn ledger() -> TicketLedger {
        TicketLedger {
            bouncer: Pubkey::new_unique(),
            accountant: Pubkey::new_unique(),
            name: "TicketMaestro".to_string(),
            symbol: "TM".to_string(),
            regular_fee: REG_FEE,
            vip_fee: VIP_FEE,
            max_mint: 10,
            tickets_left: 20,
            current_event: 0,
            next_ticket_id: 0,
            mint_cooldown: MINT_COOLDOWN_SECONDS,
            paused: false,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_fee_schedule_packing() {
        let packed = pack_fee_schedules(REG_FEE, VIP_FEE);
        assert_eq!(packed & u64::MAX as u128, REG_FEE as u128);
        assert_eq!(packed >> 64, VIP_FEE as u128);

        let ledger = ledger();
        assert_eq!(ledger.fee_schedules(), packed);
        assert_eq!(
            unpack_fee_schedules(packed),
            FeeSchedules {
                regular: REG_FEE,
                vip: VIP_FEE
            }
        );
        assert_eq!(ledger.mint_fee_schedules(), unpack_fee_schedules(packed));
    }

    #[test]
    fn test_payment_selects_tier() {
        let ledger = ledger();

        assert_eq!(ledger.price_tier(1, REG_FEE).unwrap(), FeeTier::Regular);
        assert_eq!(ledger.price_tier(3, 3 * VIP_FEE).unwrap(), FeeTier::Vip);
        assert!(matches!(
            ledger.price_tier(2, REG_FEE),
            Err(MaestroError::InvalidPayment)
        ));
        assert!(matches!(
            ledger.price_tier(1, REG_FEE + 1),
            Err(MaestroError::InvalidPayment)
        ));
    }

    #[test]
    fn test_overflowing_tier_total_is_no_match() {
        let mut ledger = ledger();

        ledger.set_fee_schedules(u64::MAX, 1);
        assert_eq!(ledger.price_tier(2, 2).unwrap(), FeeTier::Vip);

        ledger.set_fee_schedules(1, u64::MAX);
        assert_eq!(ledger.price_tier(2, 2).unwrap(), FeeTier::Regular);
        assert!(matches!(
            ledger.price_tier(2, 3),
            Err(MaestroError::InvalidPayment)
        ));
    }

    #[test]
    fn test_zero_payment_always_rejected() {
        let mut ledger = ledger();
        assert!(matches!(
            ledger.price_tier(1, 0),
            Err(MaestroError::InvalidPayment)
        ));

        // zero count with zero payment is not a free mint
        assert!(matches!(
            ledger.quote_mint(0, 0, None, 0),
            Err(MaestroError::InvalidPayment)
        ));

        // even a zero fee cannot be paid with nothing
        ledger.set_fee_schedules(0, 1);
        assert!(matches!(
            ledger.price_tier(1, 0),
            Err(MaestroError::InvalidPayment)
        ));
        assert_eq!(ledger.price_tier(1, 1).unwrap(), FeeTier::Vip);
    }

    #[test]
    fn test_zero_stock_rejects_mint() {
        let mut ledger = ledger();
        ledger.tickets_left = 0;

        assert!(matches!(
            ledger.quote_mint(1, REG_FEE, None, 0),
            Err(MaestroError::OutOfStock)
        ));
    }

    #[test]
    fn test_check_order_stock_then_cap_then_cooldown_then_payment() {
        let mut ledger = ledger();
        ledger.tickets_left = 5;

        assert!(matches!(
            ledger.quote_mint(11, 0, Some(0), 0),
            Err(MaestroError::OutOfStock)
        ));

        ledger.tickets_left = 20;
        assert!(matches!(
            ledger.quote_mint(11, 0, Some(0), 0),
            Err(MaestroError::TooManyRequested)
        ));
        assert!(matches!(
            ledger.quote_mint(1, 0, Some(0), 0),
            Err(MaestroError::RateLimited)
        ));
        assert!(matches!(
            ledger.quote_mint(1, 0, None, 0),
            Err(MaestroError::InvalidPayment)
        ));
    }

    #[test]
    fn test_cooldown_window() {
        let ledger = ledger();
        let last = 1_700_000_000;

        assert!(matches!(
            ledger.check_cooldown(Some(last), last),
            Err(MaestroError::RateLimited)
        ));
        assert!(matches!(
            ledger.check_cooldown(Some(last), last + MINT_COOLDOWN_SECONDS - 1),
            Err(MaestroError::RateLimited)
        ));
        assert!(ledger
            .check_cooldown(Some(last), last + MINT_COOLDOWN_SECONDS)
            .is_ok());
        assert!(ledger.check_cooldown(None, last).is_ok());
    }

    #[test]
    fn test_zero_cooldown_allows_back_to_back_mints() {
        let mut ledger = ledger();
        ledger.mint_cooldown = 0;

        assert!(ledger.check_cooldown(Some(50), 50).is_ok());
    }

    #[test]
    fn test_mint_up_to_cap_and_drain_stock() {
        let mut ledger = ledger();
        let mut now = 0;
        let mut last = None;

        for _ in 0..2 {
            let tier = ledger.quote_mint(10, 10 * REG_FEE, last, now).unwrap();
            let before = ledger.tickets_left;
            let receipt = ledger.commit_mint(10, tier).unwrap();
            assert_eq!(ledger.tickets_left, before - 10);
            assert_eq!(receipt.count, 10);
            last = Some(now);
            now += MINT_COOLDOWN_SECONDS;
        }

        assert_eq!(ledger.tickets_left, 0);
        assert_eq!(ledger.next_ticket_id, 20);
        assert!(matches!(
            ledger.quote_mint(1, REG_FEE, last, now),
            Err(MaestroError::OutOfStock)
        ));
    }

    #[test]
    fn test_commit_mint_cannot_oversell() {
        let mut ledger = ledger();
        ledger.tickets_left = 2;

        assert!(matches!(
            ledger.commit_mint(3, FeeTier::Regular),
            Err(MaestroError::OutOfStock)
        ));
        assert_eq!(ledger.tickets_left, 2);
        assert_eq!(ledger.next_ticket_id, 0);
    }

    #[test]
    fn test_receipts_follow_event_epochs_in_mint_order() {
        let mut ledger = ledger();
        let mut tagged = Vec::new();

        for count in [1u64, 1, 2] {
            let receipt = ledger.commit_mint(count, FeeTier::Regular).unwrap();
            for id in receipt.first_id..receipt.first_id + receipt.count {
                tagged.push((id, receipt.event_id));
            }
            ledger.advance_event().unwrap();
        }

        assert_eq!(tagged, vec![(0, 0), (1, 1), (2, 2), (3, 2)]);
        assert_eq!(ledger.current_event, 3);
        assert!(ledger.ticket_exists(3));
        assert!(!ledger.ticket_exists(4));
    }

    #[test]
    fn test_no_ticket_exists_before_first_mint() {
        let ledger = ledger();
        assert!(!ledger.ticket_exists(0));
    }

    #[test]
    fn test_paused_ledger_rejects_mint() {
        let mut ledger = ledger();
        ledger.paused = true;

        assert!(matches!(
            ledger.quote_mint(1, REG_FEE, None, 0),
            Err(MaestroError::MintingPaused)
        ));
    }

    #[test]
    fn test_both_tiers_overflowing_is_invalid_payment() {
        let mut ledger = ledger();
        ledger.set_fee_schedules(u64::MAX, u64::MAX);

        assert!(matches!(
            ledger.price_tier(2, 1),
            Err(MaestroError::InvalidPayment)
        ));
    }
}
