mod menu;

pub use menu::run_menu;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::application::{run_demo, DemoReport, LedgerService, StepOutcome};
use crate::domain::{format_cents, parse_cents, Balance, Cents, MAX_BALANCE, MIN_BALANCE};

/// Tally - Account Management System
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "An in-memory account ledger with an interactive balance menu")]
#[command(version)]
pub struct Cli {
    /// Starting balance for the session (0.00 to 9999.99)
    #[arg(long, default_value = "1000.00", value_parser = parse_initial_balance)]
    pub initial_balance: Cents,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive account menu (the default)
    Menu,

    /// Run a scripted session showing each business rule in action
    Demo {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the business rules enforced by the ledger
    Rules,
}

/// Parse and range-check the `--initial-balance` argument.
pub fn parse_initial_balance(input: &str) -> Result<Cents, String> {
    let cents = parse_cents(input).map_err(|e| format!("{}: {}", input, e))?;
    if !Balance::in_bounds(cents) {
        return Err(format!(
            "{} is outside {} to {}",
            input,
            format_cents(MIN_BALANCE),
            format_cents(MAX_BALANCE)
        ));
    }
    Ok(cents)
}

/// Install the global tracing subscriber. Logs go to stderr so they never
/// mix with the menu on stdout.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => {
                let service = LedgerService::with_balance(self.initial_balance)
                    .context("Failed to create ledger")?;
                debug!(balance = %service.read(), "starting interactive session");
                run_interactive(&service).await?;
            }

            Commands::Demo { format } => {
                let report = run_demo();
                match format.as_str() {
                    "json" => {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    "text" => print_demo(&report),
                    _ => {
                        anyhow::bail!("Unknown format: {}. Use text or json", format);
                    }
                }
            }

            Commands::Rules => print_rules(),
        }

        Ok(())
    }
}

async fn run_interactive(service: &LedgerService) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();

    tokio::select! {
        result = run_menu(service, stdin, stdout) => result,
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for interrupt signal")?;
            println!();
            println!();
            println!("Received interrupt signal. Shutting down gracefully...");
            // The blocking stdin reader would hold runtime shutdown until the next line.
            std::process::exit(0);
        }
    }
}

fn print_demo(report: &DemoReport) {
    println!("{}", "=".repeat(50));
    println!("ACCOUNT LEDGER DEMO");
    println!("{}", "=".repeat(50));

    for (i, step) in report.steps.iter().enumerate() {
        println!();
        let amount = step
            .amount
            .map(|a| format!(" {}", format_cents(a)))
            .unwrap_or_default();
        println!("{}. {} ({}{})", i + 1, step.description, step.action, amount);
        match &step.outcome {
            StepOutcome::Accepted { balance } => {
                println!("   Accepted. Balance: {}", balance);
            }
            StepOutcome::Rejected { reason, balance } => {
                println!("   Rejected: {}", reason);
                println!("   Balance unchanged: {}", balance);
            }
        }
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("Final balance: {}", report.final_balance);
    println!("{}", "=".repeat(50));
}

fn print_rules() {
    println!("Business Rules");
    println!("{}", "-".repeat(50));
    println!("1. Initial balance: {}", Balance::default());
    println!(
        "2. Credits are accepted while the balance stays at or below {}",
        format_cents(MAX_BALANCE)
    );
    println!("3. Debits cannot exceed the current balance");
    println!("4. Amounts use at most 2 decimal places");
    println!("5. Maximum account balance: {}", format_cents(MAX_BALANCE));
    println!(
        "6. Overdraft protection: balance never drops below {}",
        format_cents(MIN_BALANCE)
    );
}
