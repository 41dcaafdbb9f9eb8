use serde::Serialize;

use crate::domain::{Balance, Cents, TransactionError};

use super::{LedgerService, Operation};

/// One scripted step of the demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoStep {
    pub description: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Cents>,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepOutcome {
    Accepted { balance: Balance },
    Rejected { reason: String, balance: Balance },
}

impl StepOutcome {
    pub fn balance(&self) -> Balance {
        match self {
            StepOutcome::Accepted { balance } | StepOutcome::Rejected { balance, .. } => *balance,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, StepOutcome::Accepted { .. })
    }
}

/// Full transcript of a demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
    pub final_balance: Balance,
}

/// Walk a fresh ledger through the business rules: normal credit and debit,
/// overdraft protection, the maximum balance, and invalid input.
pub fn run_demo() -> DemoReport {
    let service = LedgerService::new();
    let mut steps = Vec::new();

    record(&mut steps, &service, "Initial balance", Operation::Total);
    record(&mut steps, &service, "Credit 250.50", Operation::Credit(25_050));
    record(&mut steps, &service, "Debit 150.25", Operation::Debit(15_025));
    record(&mut steps, &service, "Overdraft protection", Operation::Debit(120_000));
    record(&mut steps, &service, "Negative amounts are refused", Operation::Credit(-500));

    steps.push(DemoStep {
        description: "Set balance to 9950.00".to_string(),
        action: "write".to_string(),
        amount: Some(995_000),
        outcome: settle(&service, service.write(995_000)),
    });

    record(&mut steps, &service, "Credit up to the maximum", Operation::Credit(4_999));
    record(&mut steps, &service, "Maximum balance limit", Operation::Credit(1));

    DemoReport {
        final_balance: service.read(),
        steps,
    }
}

fn record(
    steps: &mut Vec<DemoStep>,
    service: &LedgerService,
    description: &str,
    operation: Operation,
) {
    let amount = match operation {
        Operation::Total => None,
        Operation::Credit(amount) | Operation::Debit(amount) => Some(amount),
    };
    let result = service.execute(operation).map(|outcome| outcome.balance);
    steps.push(DemoStep {
        description: description.to_string(),
        action: operation.as_str().to_string(),
        amount,
        outcome: settle(service, result),
    });
}

fn settle(service: &LedgerService, result: Result<Balance, TransactionError>) -> StepOutcome {
    match result {
        Ok(balance) => StepOutcome::Accepted { balance },
        Err(e) => StepOutcome::Rejected {
            reason: e.to_string(),
            balance: service.read(),
        },
    }
}
