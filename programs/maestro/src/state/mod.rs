//! State account definitions

pub mod accountant;
pub mod bouncer;
pub mod holder;
pub mod ticket;
pub mod ticket_ledger;

pub use accountant::*;
pub use bouncer::*;
pub use holder::*;
pub use ticket::*;
pub use ticket_ledger::*;
