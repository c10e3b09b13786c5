//! Order - A table's visit, from intake to bill
//!
//! An order starts as a [`DraftOrder`] while items are being collected.
//! Billing consumes the draft and produces a [`BilledOrder`], which is
//! immutable, so an order can only ever be billed once.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    entities::MenuItem,
    value_objects::{Currency, Money},
};

/// Rule printed between bill sections
pub const BILL_RULE: &str = "----------------------------------------";

/// OrderLine - A copy of the menu item at the time it was ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub price: Money,
}

impl From<&MenuItem> for OrderLine {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Order still being taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOrder {
    table_number: i32,
    party_size: i32,
    lines: Vec<OrderLine>,
}

impl DraftOrder {
    pub fn new(table_number: i32, party_size: i32) -> Self {
        Self {
            table_number,
            party_size,
            lines: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: &MenuItem) {
        self.lines.push(OrderLine::from(item));
    }

    pub fn table_number(&self) -> i32 {
        self.table_number
    }

    pub fn party_size(&self) -> i32 {
        self.party_size
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of all line prices (zero for an empty order)
    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price).sum()
    }
}

/// Order that has been billed and counted in the sales totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilledOrder {
    id: Uuid,
    table_number: i32,
    party_size: i32,
    lines: Vec<OrderLine>,
    total: Money,
    billed_at: DateTime<Utc>,
}

impl BilledOrder {
    /// Only the sales ledger finalizes drafts
    pub(crate) fn from_draft(draft: DraftOrder) -> Self {
        let total = draft.total();
        Self {
            id: Uuid::new_v4(),
            table_number: draft.table_number,
            party_size: draft.party_size,
            lines: draft.lines,
            total,
            billed_at: Utc::now(),
        }
    }

    /// Receipt identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn table_number(&self) -> i32 {
        self.table_number
    }

    pub fn party_size(&self) -> i32 {
        self.party_size
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn billed_at(&self) -> DateTime<Utc> {
        self.billed_at
    }

    /// Itemized bill as printed to the console
    pub fn render_bill(&self, currency: &Currency) -> String {
        let mut out = format!(
            "\n--- Bill for Table {} ({} pax) ---\n",
            self.table_number, self.party_size
        );

        if self.lines.is_empty() {
            out.push_str("No items ordered.\n");
        } else {
            for line in &self.lines {
                out.push_str(&format!("{} - {} {}\n", line.name, currency, line.price));
            }
        }

        out.push_str(BILL_RULE);
        out.push('\n');
        out.push_str(&format!(
            "Total charges for this table: {} {}\n",
            currency, self.total
        ));
        out.push_str(BILL_RULE);
        out.push_str("\n\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem::new("Pizza", Money::from_cents(1600), "Main Course")
    }

    fn cake() -> MenuItem {
        MenuItem::new("Cake", Money::from_cents(800), "Dessert")
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let mut draft = DraftOrder::new(5, 2);
        draft.add_item(&pizza());
        draft.add_item(&cake());
        draft.add_item(&cake());
        assert_eq!(draft.total(), Money::from_cents(3200));
    }

    #[test]
    fn test_lines_are_copies() {
        let mut item = pizza();
        let mut draft = DraftOrder::new(1, 1);
        draft.add_item(&item);
        item.price = Money::from_cents(9900);
        assert_eq!(draft.lines()[0].price, Money::from_cents(1600));
    }

    #[test]
    fn test_render_bill() {
        let mut draft = DraftOrder::new(5, 2);
        draft.add_item(&pizza());
        draft.add_item(&cake());
        let billed = BilledOrder::from_draft(draft);

        let bill = billed.render_bill(&Currency::default());
        assert!(bill.contains("--- Bill for Table 5 (2 pax) ---"));
        assert!(bill.contains("Pizza - RM 16.00\n"));
        assert!(bill.contains("Cake - RM 8.00\n"));
        assert!(bill.contains("Total charges for this table: RM 24.00\n"));
        assert_eq!(bill.matches(BILL_RULE).count(), 2);
    }

    #[test]
    fn test_render_empty_bill() {
        let billed = BilledOrder::from_draft(DraftOrder::new(3, 4));
        let bill = billed.render_bill(&Currency::new("USD"));
        assert!(bill.contains("No items ordered."));
        assert!(bill.contains("Total charges for this table: USD 0.00"));
        assert_eq!(billed.total(), Money::ZERO);
    }
}
