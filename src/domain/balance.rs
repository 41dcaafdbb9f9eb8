use serde::Serialize;

use super::{format_cents, Cents};

/// Lowest balance the account may hold (no overdraft).
pub const MIN_BALANCE: Cents = 0;

/// Highest balance the account may hold: 9999.99.
pub const MAX_BALANCE: Cents = 999_999;

/// Balance every new ledger starts with: 1000.00.
pub const INITIAL_BALANCE: Cents = 100_000;

/// An account balance in cents, always within `MIN_BALANCE..=MAX_BALANCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Balance(Cents);

impl Balance {
    /// Returns `None` when `cents` falls outside the allowed range.
    pub fn new(cents: Cents) -> Option<Self> {
        if Self::in_bounds(cents) {
            Some(Self(cents))
        } else {
            None
        }
    }

    pub fn in_bounds(cents: Cents) -> bool {
        (MIN_BALANCE..=MAX_BALANCE).contains(&cents)
    }

    pub fn cents(&self) -> Cents {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == MIN_BALANCE
    }

    /// Room left before the maximum balance is reached.
    pub fn headroom(&self) -> Cents {
        MAX_BALANCE - self.0
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self(INITIAL_BALANCE)
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_cents(self.0))
    }
}
