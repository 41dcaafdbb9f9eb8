// Application layer - the stateful ledger and its operation dispatcher.
// Front ends (the interactive menu, the demo run) only talk to LedgerService.

pub mod demo;
pub mod error;
pub mod service;

pub use demo::*;
pub use error::*;
pub use service::*;
