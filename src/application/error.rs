use thiserror::Error;

use crate::domain::Cents;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Initial balance out of range: {0} cents (allowed 0.00 to 9999.99)")]
    InvalidInitialBalance(Cents),
}
