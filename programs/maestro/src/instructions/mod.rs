pub mod accountant_init;
pub mod accountant_release;
pub mod accountant_update;
pub mod accountant_view;
pub mod bouncer_init;
pub mod bouncer_update;
pub mod ledger_init;
pub mod ledger_update;
pub mod ledger_view;
pub mod ticket_mint;
pub mod ticket_transfer;

pub use accountant_init::*;
pub use accountant_release::*;
pub use accountant_update::*;
pub use accountant_view::*;
pub use bouncer_init::*;
pub use bouncer_update::*;
pub use ledger_init::*;
pub use ledger_update::*;
pub use ledger_view::*;
pub use ticket_mint::*;
pub use ticket_transfer::*;
