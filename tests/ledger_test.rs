mod common;

use anyhow::Result;
use common::ledger_at;
use proptest::prelude::*;
use tally::application::{LedgerService, Operation};
use tally::domain::{TransactionError, MAX_BALANCE, MIN_BALANCE};

#[test]
fn test_scenario_from_initial_balance() -> Result<()> {
    let service = LedgerService::new();
    assert_eq!(service.read().to_string(), "1000.00");

    assert_eq!(service.credit_str("250.50")?.to_string(), "1250.50");
    assert_eq!(service.debit_str("150.25")?.to_string(), "1100.25");

    let result = service.debit_str("1200.00");
    assert!(matches!(
        result,
        Err(TransactionError::InsufficientFunds {
            balance: 110_025,
            amount: 120_000
        })
    ));
    assert_eq!(service.read().to_string(), "1100.25");

    Ok(())
}

#[test]
fn test_scenario_near_maximum() -> Result<()> {
    let service = ledger_at(995_000)?;

    assert_eq!(service.credit_str("49.99")?.to_string(), "9999.99");

    let result = service.credit_str("0.01");
    assert!(matches!(result, Err(TransactionError::LimitExceeded { .. })));
    assert_eq!(service.read().to_string(), "9999.99");

    Ok(())
}

#[test]
fn test_credit_boundary() -> Result<()> {
    // current + amount == 9999.99 succeeds
    let service = ledger_at(500_000)?;
    assert_eq!(service.credit(499_999)?.cents(), 999_999);

    // current + amount == 10000.00 fails
    let service = ledger_at(500_000)?;
    assert!(matches!(
        service.credit(500_000),
        Err(TransactionError::LimitExceeded { .. })
    ));
    assert_eq!(service.read().cents(), 500_000);

    Ok(())
}

#[test]
fn test_debit_boundary() -> Result<()> {
    let service = ledger_at(123_456)?;
    let balance = service.debit(123_456)?;
    assert!(balance.is_zero());
    assert_eq!(balance.to_string(), "0.00");

    let service = ledger_at(123_456)?;
    assert!(matches!(
        service.debit(123_457),
        Err(TransactionError::InsufficientFunds { .. })
    ));
    assert_eq!(service.read().cents(), 123_456);

    Ok(())
}

#[test]
fn test_negative_amounts_are_invalid() -> Result<()> {
    let service = LedgerService::new();

    assert!(matches!(
        service.credit_str("-5.00"),
        Err(TransactionError::InvalidAmount(_))
    ));
    assert!(matches!(
        service.debit_str("-5.00"),
        Err(TransactionError::InvalidAmount(_))
    ));
    assert!(matches!(
        service.credit(-500),
        Err(TransactionError::InvalidAmount(_))
    ));
    assert_eq!(service.read().cents(), 100_000);

    Ok(())
}

#[test]
fn test_malformed_amounts_are_invalid() -> Result<()> {
    let service = LedgerService::new();

    for input in ["", "abc", "12.34.56", "10.999", "1e2", "NaN"] {
        assert!(
            matches!(service.credit_str(input), Err(TransactionError::InvalidAmount(_))),
            "credit of {:?} should be invalid",
            input
        );
        assert!(
            matches!(service.debit_str(input), Err(TransactionError::InvalidAmount(_))),
            "debit of {:?} should be invalid",
            input
        );
    }
    assert_eq!(service.read().cents(), 100_000);

    Ok(())
}

#[test]
fn test_read_is_idempotent() -> Result<()> {
    let service = ledger_at(4_242)?;
    let first = service.read();
    for _ in 0..10 {
        assert_eq!(service.read(), first);
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_credit_then_debit_round_trip(start in 0..=MAX_BALANCE, amount in 0..=MAX_BALANCE) {
        prop_assume!(start + amount <= MAX_BALANCE);

        let service = LedgerService::with_balance(start).expect("start is in bounds");
        prop_assert_eq!(service.credit(amount).map(|b| b.cents()), Ok(start + amount));
        prop_assert_eq!(service.debit(amount).map(|b| b.cents()), Ok(start));
        prop_assert_eq!(service.read().cents(), start);
    }

    #[test]
    fn test_invariant_over_operation_sequence(
        ops in prop::collection::vec((any::<bool>(), -50_000i64..1_100_000), 0..200)
    ) {
        let service = LedgerService::new();

        for (is_credit, amount) in ops {
            let operation = if is_credit {
                Operation::Credit(amount)
            } else {
                Operation::Debit(amount)
            };

            let before = service.read();
            if service.execute(operation).is_err() {
                prop_assert_eq!(service.read(), before, "rejected {:?} changed balance", operation);
            }
            let cents = service.read().cents();
            prop_assert!((MIN_BALANCE..=MAX_BALANCE).contains(&cents), "balance {} escaped bounds", cents);
        }
    }
}

#[test]
fn test_independent_ledgers() -> Result<()> {
    let a = LedgerService::new();
    let b = LedgerService::new();

    a.credit(10_000)?;
    b.debit(10_000)?;

    assert_eq!(a.read().cents(), 110_000);
    assert_eq!(b.read().cents(), 90_000);
    Ok(())
}
