use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::LedgerService;

/// Interactive account menu. Reads choices and amounts line by line from
/// `input` and writes prompts and results to `out`.
///
/// The choice line must be exactly `1` to `4` once trimmed. Lines that are
/// not valid UTF-8 are decoded lossily, so they land as an invalid choice or
/// an invalid amount instead of ending the session.
///
/// Returns when the user picks "Exit" or the input is exhausted.
pub async fn run_menu<R, W>(service: &LedgerService, mut input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Starting Account Management System...")?;
    writeln!(out)?;

    loop {
        print_menu(&mut out)?;

        let Some(choice) = prompt(&mut input, &mut out, "Enter your choice (1-4): ").await? else {
            break;
        };

        match choice.trim() {
            "1" => {
                writeln!(out, "Current balance: {}", service.read())?;
            }
            "2" => {
                let Some(amount) = prompt(&mut input, &mut out, "Enter credit amount: ").await?
                else {
                    break;
                };
                match service.credit_str(&amount) {
                    Ok(balance) => writeln!(out, "Amount credited. New balance: {}", balance)?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            "3" => {
                let Some(amount) = prompt(&mut input, &mut out, "Enter debit amount: ").await?
                else {
                    break;
                };
                match service.debit_str(&amount) {
                    Ok(balance) => writeln!(out, "Amount debited. New balance: {}", balance)?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            "4" => break,
            _ => {
                writeln!(out, "Invalid choice, please select 1-4.")?;
            }
        }

        writeln!(out)?;
    }

    writeln!(out, "Exiting the program. Goodbye!")?;
    out.flush()?;
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "-".repeat(32))?;
    writeln!(out, "Account Management System")?;
    writeln!(out, "1. View Balance")?;
    writeln!(out, "2. Credit Account")?;
    writeln!(out, "3. Debit Account")?;
    writeln!(out, "4. Exit")?;
    writeln!(out, "{}", "-".repeat(32))?;
    Ok(())
}

/// Show `message` and wait for the next line. `None` means end of input.
async fn prompt<R, W>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
