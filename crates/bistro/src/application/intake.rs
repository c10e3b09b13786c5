//! Order Intake - Register a table and take its order
//!
//! Table number, party size, menu listing, item count, then one selection
//! per item. A finished intake is billed straight away; there is no way to
//! park an order unbilled.

use crate::application::{input::read_integer, Session};
use crate::domain::{
    entities::{BilledOrder, DraftOrder},
    errors::DomainError,
    services::present,
};
use crate::ports::Console;

pub const TABLE_PROMPT: &str = "Enter Table Number: ";
pub const PARTY_PROMPT: &str = "Enter number of patrons at the table: ";
pub const COUNT_PROMPT: &str = "Enter the number of items you want to order: ";
pub const ITEM_PROMPT: &str = "Enter the item number you want to order: ";

/// Take one order and bill it.
///
/// Returns `Ok(None)` when the menu is empty and no order was taken.
pub fn take_order<'s, C: Console + ?Sized>(
    session: &'s mut Session,
    console: &mut C,
) -> Result<Option<&'s BilledOrder>, DomainError> {
    let policy = session.retry_policy();

    let table_number = read_integer(console, TABLE_PROMPT, policy)?;
    let party_size = read_integer(console, PARTY_PROMPT, policy)?;
    let mut draft = DraftOrder::new(table_number, party_size);

    let presentation = present(session.catalog(), session.currency());
    console.write(&presentation.text)?;

    if presentation.index_map.is_empty() {
        tracing::warn!(table = table_number, "Order aborted, menu is empty");
        console.write_line("Cannot take order, menu is empty.")?;
        return Ok(None);
    }

    let requested = read_integer(console, COUNT_PROMPT, policy)?;
    if requested < 0 {
        // Kept as an empty order rather than rejected
        tracing::warn!(table = table_number, requested, "Negative item count");
        console.write_line("No items requested.")?;
    }
    let wanted = usize::try_from(requested).unwrap_or(0);

    while draft.lines().len() < wanted {
        let choice = read_integer(console, ITEM_PROMPT, policy)?;
        let selected = presentation
            .index_map
            .resolve(choice)
            .and_then(|index| {
                session.catalog().get(index).ok_or_else(|| {
                    DomainError::Validation(format!("catalog has no item at index {}", index))
                })
            });

        match selected {
            Ok(item) => {
                draft.add_item(item);
                console.write_line(&format!("Added: {}", item.name))?;
            }
            Err(DomainError::SelectionOutOfRange { choice, max }) => {
                tracing::debug!(choice, max, "Selection out of range");
                console.write_line(&format!(
                    "Invalid choice ({}). Please select a number between 1 and {}.",
                    choice, max
                ))?;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        table = table_number,
        party = party_size,
        items = draft.lines().len(),
        "Order registered"
    );
    console.write_line(&format!("Order registered for Table {}.", table_number))?;

    let currency = session.currency().clone();
    let billed = session.ledger_mut().bill(draft);
    console.write(&billed.render_bill(&currency))?;

    Ok(Some(billed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BufferedConsole;
    use crate::domain::{
        entities::{Catalog, MenuItem},
        value_objects::{Currency, Money, RetryPolicy},
    };

    fn two_item_session() -> Session {
        let catalog = Catalog::from_items(vec![
            MenuItem::new("Pizza", Money::from_cents(1600), "Main Course"),
            MenuItem::new("Cake", Money::from_cents(800), "Dessert"),
        ])
        .unwrap();
        Session::new(catalog, Currency::default()).with_retry_policy(RetryPolicy::Limited(3))
    }

    #[test]
    fn test_two_item_order() {
        let mut session = two_item_session();
        let mut console = BufferedConsole::new(["5", "2", "2", "1", "2"]);

        let billed = take_order(&mut session, &mut console).unwrap().unwrap();
        assert_eq!(billed.table_number(), 5);
        assert_eq!(billed.party_size(), 2);
        assert_eq!(billed.total(), Money::from_cents(2400));

        let out = console.output();
        assert!(out.contains("Pizza - RM 16.00\n"));
        assert!(out.contains("Cake - RM 8.00\n"));
        assert!(out.contains("Total charges for this table: RM 24.00"));
        assert!(out.contains("Order registered for Table 5."));
        assert_eq!(session.ledger().sales().daily_total(), Money::from_cents(2400));
        assert_eq!(session.ledger().sales().monthly_total(), Money::from_cents(2400));
    }

    #[test]
    fn test_selection_goes_through_display_numbers() {
        let mut session = two_item_session();
        // Display 1 is Cake: Dessert sorts before Main Course
        let mut console = BufferedConsole::new(["1", "1", "1", "1"]);

        let billed = take_order(&mut session, &mut console).unwrap().unwrap();
        assert_eq!(billed.lines()[0].name, "Cake");
        assert!(console.output().contains("Added: Cake"));
    }

    #[test]
    fn test_out_of_range_selection_retries_same_slot() {
        let mut session = two_item_session();
        let mut console = BufferedConsole::new(["1", "1", "1", "5", "1"]);

        let billed = take_order(&mut session, &mut console).unwrap().unwrap();
        assert_eq!(billed.lines().len(), 1);

        let out = console.output();
        assert_eq!(
            out.matches("Invalid choice (5). Please select a number between 1 and 2.")
                .count(),
            1
        );
        assert_eq!(out.matches("Added: ").count(), 1);
    }

    #[test]
    fn test_zero_items_still_billed() {
        let mut session = two_item_session();
        let mut console = BufferedConsole::new(["3", "4", "0"]);

        let billed = take_order(&mut session, &mut console).unwrap().unwrap();
        assert!(billed.lines().is_empty());
        assert_eq!(billed.total(), Money::ZERO);

        assert!(console.output().contains("Total charges for this table: RM 0.00"));
        assert_eq!(session.ledger().orders().len(), 1);
        assert_eq!(session.ledger().sales().daily_total(), Money::ZERO);
    }

    #[test]
    fn test_negative_count_is_empty_order() {
        let mut session = two_item_session();
        let mut console = BufferedConsole::new(["3", "4", "-2"]);

        let billed = take_order(&mut session, &mut console).unwrap().unwrap();
        assert!(billed.lines().is_empty());
        assert!(console.output().contains("No items requested."));
        assert_eq!(session.ledger().orders().len(), 1);
    }

    #[test]
    fn test_empty_menu_aborts_without_billing() {
        let mut session = Session::new(Catalog::default(), Currency::default());
        let mut console = BufferedConsole::new(["1", "2"]);

        let outcome = take_order(&mut session, &mut console).unwrap();
        assert!(outcome.is_none());

        let out = console.output();
        assert!(out.contains("Menu is currently empty."));
        assert!(out.contains("Cannot take order, menu is empty."));
        assert!(session.ledger().orders().is_empty());
        assert_eq!(session.ledger().sales().daily_total(), Money::ZERO);
    }

    #[test]
    fn test_closed_input_mid_order_bills_nothing() {
        let mut session = two_item_session();
        let mut console = BufferedConsole::new(["1", "1", "2", "1"]);

        let result = take_order(&mut session, &mut console);
        assert!(matches!(result, Err(DomainError::InputClosed)));
        assert!(session.ledger().orders().is_empty());
    }
}
