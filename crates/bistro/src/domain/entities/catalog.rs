//! Catalog - The fixed menu the restaurant takes orders against
//!
//! Items are identified by their position in the catalog. The catalog
//! never changes after it is built.

use std::collections::BTreeSet;

use crate::domain::{entities::MenuItem, errors::DomainError, value_objects::Money};

/// Catalog - Ordered list of menu items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Built-in sample menu used when no menu is configured
    pub fn sample() -> Self {
        Self {
            items: vec![
                MenuItem::new("Spaghetti Carbonara", Money::from_cents(1850), "Main Course"),
                MenuItem::new("Caesar Salad", Money::from_cents(1200), "Appetizer"),
                MenuItem::new("Margherita Pizza", Money::from_cents(1600), "Main Course"),
                MenuItem::new("Chocolate Cake", Money::from_cents(800), "Dessert"),
                MenuItem::new("Cappuccino", Money::from_cents(650), "Beverage"),
            ],
        }
    }

    /// Build a catalog from configured items, rejecting invalid ones
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, DomainError> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in lexicographic order
    pub fn categories(&self) -> BTreeSet<&str> {
        self.items.iter().map(|item| item.category.as_str()).collect()
    }
}
