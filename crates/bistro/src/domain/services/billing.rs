//! Sales Ledger - Billing and running totals
//!
//! Billing takes ownership of a draft order. The draft is turned into a
//! billed order, its total is added to the day and month counters once,
//! and the billed order is kept in the ledger's order list.

use crate::domain::entities::{BilledOrder, DraftOrder, SalesAggregate};

/// Registered orders and the totals they contributed to
#[derive(Debug, Default)]
pub struct SalesLedger {
    orders: Vec<BilledOrder>,
    sales: SalesAggregate,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bill a draft order and record its total
    pub fn bill(&mut self, draft: DraftOrder) -> &BilledOrder {
        let billed = BilledOrder::from_draft(draft);
        self.sales.record(billed.total());

        tracing::info!(
            receipt = %billed.id(),
            table = billed.table_number(),
            items = billed.lines().len(),
            total = %billed.total(),
            "Order billed"
        );

        self.orders.push(billed);
        let last = self.orders.len() - 1;
        &self.orders[last]
    }

    pub fn orders(&self) -> &[BilledOrder] {
        &self.orders
    }

    pub fn sales(&self) -> &SalesAggregate {
        &self.sales
    }
}
