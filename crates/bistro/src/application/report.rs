//! Sales Report - Print the running totals

use crate::application::Session;
use crate::domain::errors::DomainError;
use crate::ports::Console;

/// Print day and month totals. Read-only: nothing is reset.
pub fn print_sales_report<C: Console + ?Sized>(
    session: &Session,
    console: &mut C,
) -> Result<(), DomainError> {
    let sales = session.ledger().sales();
    console.write(&sales.render_report(session.currency()))?;
    Ok(())
}
