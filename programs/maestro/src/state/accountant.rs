use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MaestroError;

/// One entry of the payee table. `key` is the stable accounting key; it is
/// not necessarily the address that receives the payout.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PayeeSlot {
    pub key: Pubkey,
    pub shares: u64,
    pub released: u64,
}

/// Pull-payment revenue splitter.
///
/// Lamports above the rent-exempt minimum of this account are the unreleased
/// balance. Slot 0 belongs to the admin wallet, slot 1 is the beneficiary
/// slot whose payout is redirected to `fund_receiver`.
#[account]
#[derive(InitSpace)]
pub struct Accountant {
    pub bouncer: Pubkey,
    pub admin_wallet: Pubkey,
    pub fund_receiver: Pubkey,
    pub payees: [PayeeSlot; 2],
    pub total_shares: u64,
    pub total_released: u64,
    pub created_at: i64,
}

impl Accountant {
    pub fn new(bouncer: Pubkey, admin_wallet: Pubkey, fund_receiver: Pubkey, now: i64) -> Self {
        Self {
            bouncer,
            admin_wallet,
            fund_receiver,
            payees: [
                PayeeSlot {
                    key: admin_wallet,
                    shares: ADMIN_SHARES,
                    released: 0,
                },
                PayeeSlot {
                    key: BENEFICIARY_SLOT_KEY,
                    shares: BENEFICIARY_SHARES,
                    released: 0,
                },
            ],
            total_shares: TOTAL_SHARES,
            total_released: 0,
            created_at: now,
        }
    }

    pub fn payee(&self, index: u64) -> std::result::Result<Pubkey, MaestroError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.payees.get(i))
            .map(|slot| slot.key)
            .ok_or(MaestroError::PayeeIndexOutOfRange)
    }

    fn slot(&self, key: &Pubkey) -> Option<&PayeeSlot> {
        self.payees.iter().find(|slot| slot.key == *key)
    }

    fn slot_mut(&mut self, key: &Pubkey) -> Option<&mut PayeeSlot> {
        self.payees.iter_mut().find(|slot| slot.key == *key)
    }

    pub fn shares(&self, key: &Pubkey) -> u64 {
        self.slot(key).map(|slot| slot.shares).unwrap_or(0)
    }

    pub fn released(&self, key: &Pubkey) -> u64 {
        self.slot(key).map(|slot| slot.released).unwrap_or(0)
    }

    pub fn total_received(&self, balance: u64) -> std::result::Result<u64, MaestroError> {
        balance
            .checked_add(self.total_released)
            .ok_or(MaestroError::MathOverflow)
    }

    /// `total_received * shares / total_shares - released`, truncating.
    pub fn releasable(&self, key: &Pubkey, balance: u64) -> std::result::Result<u64, MaestroError> {
        let slot = match self.slot(key) {
            Some(slot) => slot,
            None => return Ok(0),
        };
        let total_received = self.total_received(balance)? as u128;
        let entitled = total_received
            .checked_mul(slot.shares as u128)
            .and_then(|v| v.checked_div(self.total_shares as u128))
            .ok_or(MaestroError::MathOverflow)?;
        let pending = entitled
            .checked_sub(slot.released as u128)
            .ok_or(MaestroError::MathOverflow)?;
        u64::try_from(pending).map_err(|_| MaestroError::MathOverflow)
    }

    /// Books a withdrawal for the slot and returns the amount to pay out.
    /// Must be called before any lamports leave the account.
    fn book_release(&mut self, key: &Pubkey, balance: u64) -> std::result::Result<u64, MaestroError> {
        let amount = self.releasable(key, balance)?;
        if amount == 0 {
            return Err(MaestroError::NotDuePayment);
        }
        let total_released = self
            .total_released
            .checked_add(amount)
            .ok_or(MaestroError::MathOverflow)?;
        let slot = self.slot_mut(key).ok_or(MaestroError::NotDuePayment)?;
        slot.released = slot
            .released
            .checked_add(amount)
            .ok_or(MaestroError::MathOverflow)?;
        self.total_released = total_released;
        Ok(amount)
    }

    /// Books a release for `account`, which must be the admin wallet.
    pub fn book_admin_release(
        &mut self,
        account: &Pubkey,
        balance: u64,
    ) -> std::result::Result<u64, MaestroError> {
        if *account != self.admin_wallet {
            return Err(MaestroError::NotAuthorizedReceiver);
        }
        let admin_wallet = self.admin_wallet;
        self.book_release(&admin_wallet, balance)
    }

    /// Books a release of the beneficiary slot and returns the amount, which
    /// is owed to the current `fund_receiver`.
    pub fn book_beneficiary_release(&mut self, balance: u64) -> std::result::Result<u64, MaestroError> {
        self.book_release(&BENEFICIARY_SLOT_KEY, balance)
    }

    pub fn set_fund_receiver(&mut self, fund_receiver: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.fund_receiver, fund_receiver)
    }
}
