use anchor_lang::prelude::*;

use crate::constants::BENEFICIARY_SLOT_KEY;
use crate::errors::MaestroError;
use crate::events::PaymentReleased;
use crate::instructions::accountant_view::accountant_balance;
use crate::state::Accountant;

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut)]
    pub accountant: Account<'info, Accountant>,

    /// CHECK: must be the admin wallet, verified against the accountant
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReleaseToBeneficiary<'info> {
    #[account(mut)]
    pub accountant: Account<'info, Accountant>,

    /// CHECK: must be the current fund receiver
    #[account(
        mut,
        address = accountant.fund_receiver @ MaestroError::FundReceiverMismatch,
    )]
    pub fund_receiver: UncheckedAccount<'info>,
}

/// Pay the admin wallet its accrued share.
///
/// Anyone may trigger the release, but the only valid recipient is the
/// admin wallet recorded at initialization.
pub fn release(ctx: Context<Release>) -> Result<()> {
    let recipient = ctx.accounts.recipient.to_account_info();
    let accountant_info = ctx.accounts.accountant.to_account_info();
    let balance = accountant_balance(&accountant_info)?;

    let accountant = &mut ctx.accounts.accountant;
    let amount = accountant.book_admin_release(recipient.key, balance)?;

    pay_out(&accountant_info, &recipient, amount)?;

    msg!("Released {} lamports to admin wallet", amount);
    emit!(PaymentReleased {
        accountant: accountant.key(),
        slot_key: accountant.admin_wallet,
        to: recipient.key(),
        amount,
    });

    Ok(())
}

/// Pay the beneficiary slot's accrued share to the current fund receiver.
pub fn release_to_beneficiary(ctx: Context<ReleaseToBeneficiary>) -> Result<()> {
    let receiver = ctx.accounts.fund_receiver.to_account_info();
    let accountant_info = ctx.accounts.accountant.to_account_info();
    let balance = accountant_balance(&accountant_info)?;

    let accountant = &mut ctx.accounts.accountant;
    let amount = accountant.book_beneficiary_release(balance)?;

    pay_out(&accountant_info, &receiver, amount)?;

    msg!("Released {} lamports to fund receiver {:?}", amount, receiver.key());
    emit!(PaymentReleased {
        accountant: accountant.key(),
        slot_key: BENEFICIARY_SLOT_KEY,
        to: receiver.key(),
        amount,
    });

    Ok(())
}

/// Moves lamports out of the program-owned accountant. Bookkeeping must
/// already reflect the payout.
fn pay_out(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_lamports = from
        .lamports()
        .checked_sub(amount)
        .ok_or(MaestroError::MathOverflow)?;
    let to_lamports = to
        .lamports()
        .checked_add(amount)
        .ok_or(MaestroError::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = from_lamports;
    **to.try_borrow_mut_lamports()? = to_lamports;

    Ok(())
}
