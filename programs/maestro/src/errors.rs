use anchor_lang::prelude::*;

#[error_code]
pub enum MaestroError {
    #[msg("Only the admin or the governor can perform this action")]
    Unauthorized,

    #[msg("Not enough tickets left in stock")]
    OutOfStock,

    #[msg("Too many tickets requested")]
    TooManyRequested,

    #[msg("Caller minted too recently, wait for the cooldown to elapse")]
    RateLimited,

    #[msg("Payment must equal count times the regular or the VIP fee")]
    InvalidPayment,

    #[msg("Account is not due payment")]
    NotDuePayment,

    #[msg("Only the admin wallet can receive these funds")]
    NotAuthorizedReceiver,

    #[msg("Query for nonexistent ticket")]
    NonexistentToken,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Ticket accounts do not match the ids being minted")]
    TicketAccountMismatch,

    #[msg("Receiver does not match the current fund receiver")]
    FundReceiverMismatch,

    #[msg("Payee index out of range")]
    PayeeIndexOutOfRange,

    #[msg("Minting is paused")]
    MintingPaused,

    #[msg("Signer does not own this ticket")]
    NotTicketOwner,

    #[msg("Cannot transfer a ticket to its current owner")]
    SelfTransfer,

    #[msg("Collection name exceeds maximum length")]
    NameTooLong,

    #[msg("Collection symbol exceeds maximum length")]
    SymbolTooLong,

    #[msg("Mint cooldown cannot be negative")]
    InvalidCooldown,

    #[msg("Bouncer account does not match the one on record")]
    InvalidBouncer,
}
