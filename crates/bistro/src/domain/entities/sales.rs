//! SalesAggregate - Running day and month totals

use crate::domain::value_objects::{Currency, Money};

/// Running sales totals for the lifetime of the process
///
/// Both counters only ever grow, by exactly one billed total per order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesAggregate {
    daily_total: Money,
    monthly_total: Money,
}

impl SalesAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, amount: Money) {
        self.daily_total += amount;
        self.monthly_total += amount;
    }

    pub fn daily_total(&self) -> Money {
        self.daily_total
    }

    pub fn monthly_total(&self) -> Money {
        self.monthly_total
    }

    /// Sales summary as printed to the console
    pub fn render_report(&self, currency: &Currency) -> String {
        format!(
            "\n=== Total Sales Summary ===\n\
             Total Sales for Today: {currency} {}\n\
             Total Sales for This Month: {currency} {}\n\
             ============================\n\n",
            self.daily_total, self.monthly_total
        )
    }
}
