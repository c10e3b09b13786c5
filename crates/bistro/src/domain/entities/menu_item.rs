//! MenuItem - One orderable dish or drink

use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, value_objects::Money};

/// MenuItem - Name, price and the category it is listed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
    pub category: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Check that the item can be offered
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("menu item name must not be empty"));
        }
        if self.price.is_negative() {
            return Err(DomainError::Validation(format!(
                "menu item '{}' has a negative price ({})",
                self.name,
                self.price.amount()
            )));
        }
        Ok(())
    }
}
