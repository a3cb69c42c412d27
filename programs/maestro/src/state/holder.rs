use anchor_lang::prelude::*;

use crate::errors::MaestroError;

/// Per-wallet record for one ledger: ticket balance and mint cooldown.
#[account]
#[derive(InitSpace)]
pub struct Holder {
    pub ticket_ledger: Pubkey,
    pub owner: Pubkey,
    pub balance: u64,
    pub last_mint_at: Option<i64>,
    pub bump: u8,
}

impl Holder {
    /// Fills in identity fields the first time an `init_if_needed` record is seen.
    pub fn ensure_initialized(&mut self, ticket_ledger: Pubkey, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.ticket_ledger = ticket_ledger;
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, count: u64) -> std::result::Result<(), MaestroError> {
        self.balance = self
            .balance
            .checked_add(count)
            .ok_or(MaestroError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, count: u64) -> std::result::Result<(), MaestroError> {
        self.balance = self
            .balance
            .checked_sub(count)
            .ok_or(MaestroError::NotTicketOwner)?;
        Ok(())
    }

    pub fn record_mint(&mut self, count: u64, now: i64) -> std::result::Result<(), MaestroError> {
        self.credit(count)?;
        self.last_mint_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Holder {
        Holder {
            ticket_ledger: Pubkey::default(),
            owner: Pubkey::default(),
            balance: 0,
            last_mint_at: None,
            bump: 0,
        }
    }

    #[test]
    fn test_ensure_initialized_only_once() {
        let mut holder = empty();
        let ledger = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        holder.ensure_initialized(ledger, owner, 254);
        holder.ensure_initialized(Pubkey::new_unique(), Pubkey::new_unique(), 1);

        assert_eq!(holder.ticket_ledger, ledger);
        assert_eq!(holder.owner, owner);
        assert_eq!(holder.bump, 254);
    }

    #[test]
    fn test_record_mint_updates_balance_and_timestamp() {
        let mut holder = empty();

        holder.record_mint(2, 10).unwrap();
        holder.record_mint(1, 3610).unwrap();

        assert_eq!(holder.balance, 3);
        assert_eq!(holder.last_mint_at, Some(3610));
    }

    #[test]
    fn test_debit_below_zero_fails() {
        let mut holder = empty();
        holder.credit(1).unwrap();
        holder.debit(1).unwrap();

        assert!(matches!(holder.debit(1), Err(MaestroError::NotTicketOwner)));
        assert_eq!(holder.balance, 0);
    }
}
