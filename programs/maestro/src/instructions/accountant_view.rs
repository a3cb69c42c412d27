use anchor_lang::prelude::*;

use crate::state::Accountant;

#[derive(Accounts)]
pub struct AccountantView<'info> {
    pub accountant: Account<'info, Accountant>,
}

/// Lamports held above the account's rent-exempt reserve, i.e. everything
/// received and not yet released.
pub fn accountant_balance(accountant: &AccountInfo) -> Result<u64> {
    let reserve = Rent::get()?.minimum_balance(accountant.data_len());
    Ok(accountant.lamports().saturating_sub(reserve))
}

pub fn payee(ctx: Context<AccountantView>, index: u64) -> Result<Pubkey> {
    Ok(ctx.accounts.accountant.payee(index)?)
}

pub fn shares(ctx: Context<AccountantView>, account: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.accountant.shares(&account))
}

pub fn total_shares(ctx: Context<AccountantView>) -> Result<u64> {
    Ok(ctx.accounts.accountant.total_shares)
}

pub fn released(ctx: Context<AccountantView>, account: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.accountant.released(&account))
}

pub fn total_released(ctx: Context<AccountantView>) -> Result<u64> {
    Ok(ctx.accounts.accountant.total_released)
}

pub fn total_received(ctx: Context<AccountantView>) -> Result<u64> {
    let accountant = &ctx.accounts.accountant;
    let balance = accountant_balance(&accountant.to_account_info())?;
    Ok(accountant.total_received(balance)?)
}

pub fn releasable(ctx: Context<AccountantView>, account: Pubkey) -> Result<u64> {
    let accountant = &ctx.accounts.accountant;
    let balance = accountant_balance(&accountant.to_account_info())?;
    Ok(accountant.releasable(&account, balance)?)
}
