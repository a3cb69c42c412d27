use anchor_lang::prelude::*;

use crate::errors::MaestroError;

/// Role authority consulted by the accountant and the ticket ledger before
/// any privileged mutation.
#[account]
#[derive(InitSpace)]
pub struct Bouncer {
    pub admin: Pubkey,
    /// `None` means there is no secondary authority.
    pub governor: Option<Pubkey>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Bouncer {
    pub fn new(admin: Pubkey, now: i64) -> Self {
        Self {
            admin,
            governor: None,
            created_at: now,
            updated_at: 0,
        }
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    pub fn is_authorized(&self, caller: &Pubkey) -> bool {
        self.is_admin(caller) || self.governor.as_ref() == Some(caller)
    }

    pub fn set_admin(
        &mut self,
        caller: &Pubkey,
        new_admin: Pubkey,
    ) -> std::result::Result<(), MaestroError> {
        if !self.is_admin(caller) {
            return Err(MaestroError::Unauthorized);
        }
        self.admin = new_admin;
        Ok(())
    }

    pub fn set_governor(
        &mut self,
        caller: &Pubkey,
        new_governor: Option<Pubkey>,
    ) -> std::result::Result<(), MaestroError> {
        if !self.is_admin(caller) {
            return Err(MaestroError::Unauthorized);
        }
        self.governor = new_governor;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_is_authorized_and_governor_starts_unset() {
        let admin = Pubkey::new_unique();
        let bouncer = Bouncer::new(admin, 100);

        assert!(bouncer.is_authorized(&admin));
        assert_eq!(bouncer.governor, None);
        assert!(!bouncer.is_authorized(&Pubkey::new_unique()));
    }

    #[test]
    fn test_governor_is_authorized_but_cannot_reassign_roles() {
        let admin = Pubkey::new_unique();
        let governor = Pubkey::new_unique();
        let mut bouncer = Bouncer::new(admin, 0);

        bouncer.set_governor(&admin, Some(governor)).unwrap();
        assert!(bouncer.is_authorized(&governor));
        assert!(!bouncer.is_admin(&governor));

        let result = bouncer.set_admin(&governor, governor);
        assert!(matches!(result, Err(MaestroError::Unauthorized)));
        let result = bouncer.set_governor(&governor, None);
        assert!(matches!(result, Err(MaestroError::Unauthorized)));
        assert_eq!(bouncer.admin, admin);
    }

    #[test]
    fn test_set_admin_replaces_previous_admin() {
        let admin = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut bouncer = Bouncer::new(admin, 0);

        bouncer.set_admin(&admin, next).unwrap();

        assert!(bouncer.is_authorized(&next));
        assert!(!bouncer.is_authorized(&admin));
    }

    #[test]
    fn test_clearing_governor_revokes_access() {
        let admin = Pubkey::new_unique();
        let governor = Pubkey::new_unique();
        let mut bouncer = Bouncer::new(admin, 0);

        bouncer.set_governor(&admin, Some(governor)).unwrap();
        bouncer.set_governor(&admin, None).unwrap();

        assert!(!bouncer.is_authorized(&governor));
    }
}
