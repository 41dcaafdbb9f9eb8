// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use tally::application::LedgerService;
use tally::cli::run_menu;
use tally::domain::{Cents, MAX_BALANCE, MIN_BALANCE};

/// Helper to create a ledger with a given starting balance
pub fn ledger_at(cents: Cents) -> Result<LedgerService> {
    Ok(LedgerService::with_balance(cents)?)
}

/// Assert the balance invariant holds for a ledger
pub fn assert_in_bounds(service: &LedgerService) {
    let cents = service.read().cents();
    assert!(
        (MIN_BALANCE..=MAX_BALANCE).contains(&cents),
        "balance {} escaped bounds",
        cents
    );
}

/// Drive the interactive menu with scripted input and capture everything it prints
pub async fn menu_transcript(service: &LedgerService, input: &str) -> Result<String> {
    menu_transcript_bytes(service, input.as_bytes()).await
}

/// Same as `menu_transcript`, for input that need not be valid UTF-8
pub async fn menu_transcript_bytes(service: &LedgerService, input: &[u8]) -> Result<String> {
    let mut out = Vec::new();
    run_menu(service, input, &mut out).await?;
    Ok(String::from_utf8(out)?)
}
