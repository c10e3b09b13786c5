//! Session - Everything one run of the program owns
//!
//! Catalog, registered orders and sales totals live here instead of in
//! globals. The main loop owns the session and lends it to each action.

use crate::domain::{
    entities::Catalog,
    services::SalesLedger,
    value_objects::{Currency, RetryPolicy},
};

/// Application context shared by all menu actions
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    ledger: SalesLedger,
    currency: Currency,
    retry_policy: RetryPolicy,
}

impl Session {
    pub fn new(catalog: Catalog, currency: Currency) -> Self {
        tracing::debug!(items = catalog.len(), currency = %currency, "Session started");
        Self {
            catalog,
            ledger: SalesLedger::new(),
            currency,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Override how many malformed answers a prompt accepts
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut SalesLedger {
        &mut self.ledger
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::sample(), Currency::default())
    }
}
