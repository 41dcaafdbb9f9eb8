use thiserror::Error;

use super::{Balance, Cents};

/// Reason a credit or debit was refused. The balance is never modified when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Invalid amount. Please enter a positive number.")]
    InvalidAmount(String),

    #[error("Credit amount would exceed maximum balance limit.")]
    LimitExceeded { balance: Cents, amount: Cents },

    #[error("Insufficient funds for this debit.")]
    InsufficientFunds { balance: Cents, amount: Cents },
}

fn validate_amount(amount: Cents) -> Result<(), TransactionError> {
    if amount < 0 {
        return Err(TransactionError::InvalidAmount(format!(
            "negative amount: {}",
            amount
        )));
    }
    Ok(())
}

/// Compute the balance after crediting `amount`.
/// Fails when the result would exceed `MAX_BALANCE`.
pub fn apply_credit(balance: Balance, amount: Cents) -> Result<Balance, TransactionError> {
    validate_amount(amount)?;

    let limit_exceeded = || TransactionError::LimitExceeded {
        balance: balance.cents(),
        amount,
    };
    if amount > balance.headroom() {
        return Err(limit_exceeded());
    }
    Balance::new(balance.cents() + amount).ok_or_else(limit_exceeded)
}

/// Compute the balance after debiting `amount`.
/// Debiting the entire balance is allowed and leaves 0.00.
pub fn apply_debit(balance: Balance, amount: Cents) -> Result<Balance, TransactionError> {
    validate_amount(amount)?;

    let insufficient = || TransactionError::InsufficientFunds {
        balance: balance.cents(),
        amount,
    };
    if amount > balance.cents() {
        return Err(insufficient());
    }
    Balance::new(balance.cents() - amount).ok_or_else(insufficient)
}
