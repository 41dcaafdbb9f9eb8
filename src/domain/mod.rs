mod balance;
mod ledger;
mod money;

pub use balance::*;
pub use ledger::*;
pub use money::*;
