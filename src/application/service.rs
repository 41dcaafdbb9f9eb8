use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{
    apply_credit, apply_debit, parse_cents, Balance, Cents, TransactionError, MAX_BALANCE,
};

use super::AppError;

/// Application service owning the single account balance.
/// This is the primary interface for any client (menu, demo, tests).
///
/// The balance sits behind one mutex and every operation holds it for the
/// whole read-check-write sequence, so concurrent callers serialize.
#[derive(Debug, Default)]
pub struct LedgerService {
    balance: Mutex<Balance>,
}

/// A request routed through [`LedgerService::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", content = "amount", rename_all = "lowercase")]
pub enum Operation {
    /// Report the current balance
    Total,
    Credit(Cents),
    Debit(Cents),
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Total => "total",
            Operation::Credit(_) => "credit",
            Operation::Debit(_) => "debit",
        }
    }
}

/// Result of a successfully executed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub operation: Operation,
    pub balance: Balance,
}

impl LedgerService {
    /// Create a ledger holding the default 1000.00.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with a custom starting balance.
    pub fn with_balance(cents: Cents) -> Result<Self, AppError> {
        let balance = Balance::new(cents).ok_or(AppError::InvalidInitialBalance(cents))?;
        Ok(Self {
            balance: Mutex::new(balance),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Balance> {
        // Writes replace the whole value, so a poisoned lock still holds a valid balance.
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current balance. Never fails and never mutates.
    pub fn read(&self) -> Balance {
        *self.lock()
    }

    /// Overwrite the balance. Values outside 0.00..=9999.99 are refused.
    pub fn write(&self, cents: Cents) -> Result<Balance, TransactionError> {
        let mut balance = self.lock();
        let current = balance.cents();
        let new_balance = Balance::new(cents).ok_or_else(|| {
            if cents > MAX_BALANCE {
                TransactionError::LimitExceeded {
                    balance: current,
                    amount: cents - current,
                }
            } else {
                TransactionError::InvalidAmount(format!("negative balance: {}", cents))
            }
        })?;

        *balance = new_balance;
        debug!(balance = %new_balance, "balance written");
        Ok(new_balance)
    }

    /// Increase the balance by `amount` cents.
    pub fn credit(&self, amount: Cents) -> Result<Balance, TransactionError> {
        let mut balance = self.lock();
        match apply_credit(*balance, amount) {
            Ok(new_balance) => {
                *balance = new_balance;
                debug!(amount, balance = %new_balance, "credit applied");
                Ok(new_balance)
            }
            Err(e) => {
                warn!(amount, balance = %*balance, error = ?e, "credit rejected");
                Err(e)
            }
        }
    }

    /// Decrease the balance by `amount` cents.
    pub fn debit(&self, amount: Cents) -> Result<Balance, TransactionError> {
        let mut balance = self.lock();
        match apply_debit(*balance, amount) {
            Ok(new_balance) => {
                *balance = new_balance;
                debug!(amount, balance = %new_balance, "debit applied");
                Ok(new_balance)
            }
            Err(e) => {
                warn!(amount, balance = %*balance, error = ?e, "debit rejected");
                Err(e)
            }
        }
    }

    /// Parse a user-supplied amount and credit it.
    pub fn credit_str(&self, input: &str) -> Result<Balance, TransactionError> {
        self.credit(parse_amount(input)?)
    }

    /// Parse a user-supplied amount and debit it.
    pub fn debit_str(&self, input: &str) -> Result<Balance, TransactionError> {
        self.debit(parse_amount(input)?)
    }

    /// Dispatch an operation to the matching ledger call.
    pub fn execute(&self, operation: Operation) -> Result<Outcome, TransactionError> {
        let balance = match operation {
            Operation::Total => self.read(),
            Operation::Credit(amount) => self.credit(amount)?,
            Operation::Debit(amount) => self.debit(amount)?,
        };
        Ok(Outcome { operation, balance })
    }
}

/// Parse an amount typed by the user. Malformed and negative input both
/// count as an invalid amount.
pub fn parse_amount(input: &str) -> Result<Cents, TransactionError> {
    let amount = parse_cents(input)
        .map_err(|e| TransactionError::InvalidAmount(format!("{:?}: {}", input.trim(), e)))?;
    if amount < 0 {
        return Err(TransactionError::InvalidAmount(format!(
            "{:?}: negative amount",
            input.trim()
        )));
    }
    Ok(amount)
}
