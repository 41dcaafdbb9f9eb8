pub mod application;
pub mod cli;
pub mod domain;

pub use application::LedgerService;
pub use domain::*;
