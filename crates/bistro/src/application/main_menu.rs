//! Main Menu - The top-level loop
//!
//! A single state: show the options, read a choice, run the chosen action
//! to completion, come back. Only the Exit option (or the end of input)
//! leaves the loop.

use crate::application::{
    input::read_integer, intake::take_order, report::print_sales_report, Session,
};
use crate::domain::{errors::DomainError, value_objects::MenuChoice};
use crate::ports::Console;

pub const BANNER: &str = "=== Restaurant Management System ===";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The user picked Exit
    Requested,
    /// The console input ended
    InputClosed,
}

/// Run the main menu until the user exits
pub fn run<C: Console + ?Sized>(
    session: &mut Session,
    console: &mut C,
) -> Result<LoopExit, DomainError> {
    loop {
        console.write(&format!("\n{}\n", BANNER))?;
        for option in MenuChoice::OPTIONS {
            console.write_line(option)?;
        }

        // Shown once; retries after a bad answer wait silently
        console.write(CHOICE_PROMPT)?;
        let choice = match read_integer(console, "", session.retry_policy()) {
            Ok(value) => MenuChoice::from(value),
            Err(DomainError::InputClosed) => return Ok(input_closed()),
            Err(e) => return Err(e),
        };
        tracing::debug!(%choice, "Main menu choice");

        match choice {
            MenuChoice::RegisterPatron => match take_order(session, console) {
                Ok(_) => {}
                Err(DomainError::InputClosed) => return Ok(input_closed()),
                Err(DomainError::RetriesExhausted { attempts }) => {
                    tracing::warn!(attempts, "Order cancelled after repeated invalid input");
                    console.write_line("Too many invalid answers. Order cancelled.")?;
                }
                Err(e) => return Err(e),
            },
            MenuChoice::DisplaySales => print_sales_report(session, console)?,
            MenuChoice::Exit => {
                console.write_line("\nExiting program. Goodbye!")?;
                return Ok(LoopExit::Requested);
            }
            MenuChoice::Unknown(_) => {
                console.write_line("\nInvalid choice. Please select 1, 2, or 3.")?;
            }
        }
    }
}

fn input_closed() -> LoopExit {
    tracing::info!("Console input closed, leaving main menu");
    LoopExit::InputClosed
}
