//! Menu Presenter - Category-grouped menu listing
//!
//! Numbers shown to the patron are decoupled from catalog storage order:
//! categories are listed alphabetically and, within a category, items keep
//! their catalog order. Selections are translated back through the
//! [`DisplayIndexMap`] returned alongside the listing.

use crate::domain::{
    entities::Catalog,
    errors::DomainError,
    value_objects::Currency,
};

/// Maps display number `n` (1-based) to the catalog index at position `n - 1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayIndexMap(Vec<usize>);

impl DisplayIndexMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Translate a display number into a catalog index
    pub fn resolve(&self, display_number: i32) -> Result<usize, DomainError> {
        let out_of_range = || DomainError::SelectionOutOfRange {
            choice: display_number,
            max: self.0.len(),
        };

        let position = usize::try_from(display_number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(out_of_range)?;

        self.0.get(position).copied().ok_or_else(out_of_range)
    }
}

/// Rendered menu plus the numbering used to render it
#[derive(Debug, Clone)]
pub struct MenuPresentation {
    pub text: String,
    pub index_map: DisplayIndexMap,
}

/// Render the catalog grouped by category and number the items 1..=K
pub fn present(catalog: &Catalog, currency: &Currency) -> MenuPresentation {
    if catalog.is_empty() {
        return MenuPresentation {
            text: "Menu is currently empty.\n".to_string(),
            index_map: DisplayIndexMap::default(),
        };
    }

    let mut text = String::from("\n=== Restaurant Menu ===\n");
    let mut map = Vec::with_capacity(catalog.len());

    for category in catalog.categories() {
        text.push_str(&format!("\n-- {} --\n", category));
        for (index, item) in catalog.items().iter().enumerate() {
            if item.category != category {
                continue;
            }
            map.push(index);
            text.push_str(&format!(
                "{}. {} - {} {}\n",
                map.len(),
                item.name,
                currency,
                item.price
            ));
        }
    }

    text.push_str("\nPlease enter the number corresponding to the item you wish to order.\n");

    tracing::debug!(items = map.len(), "Menu presented");

    MenuPresentation {
        text,
        index_map: DisplayIndexMap(map),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::MenuItem, value_objects::Money};

    fn item(name: &str, category: &str) -> MenuItem {
        MenuItem::new(name, Money::from_cents(100), category)
    }

    #[test]
    fn test_groups_by_sorted_category() {
        let presentation = present(&Catalog::sample(), &Currency::default());

        // Appetizer, Beverage, Dessert, Main Course (x2 in storage order)
        assert_eq!(presentation.index_map.as_slice(), &[1, 4, 3, 0, 2]);
        assert!(presentation.text.contains("1. Caesar Salad - RM 12.00\n"));
        assert!(presentation.text.contains("4. Spaghetti Carbonara - RM 18.50\n"));
        assert!(presentation.text.contains("5. Margherita Pizza - RM 16.00\n"));

        let appetizer = presentation.text.find("-- Appetizer --").unwrap();
        let main = presentation.text.find("-- Main Course --").unwrap();
        assert!(appetizer < main);
    }

    #[test]
    fn test_map_is_permutation_of_catalog() {
        let catalog = Catalog::from_items(vec![
            item("a", "z"),
            item("b", "y"),
            item("c", "z"),
            item("d", "x"),
            item("e", "y"),
            item("f", "x"),
        ])
        .unwrap();
        let presentation = present(&catalog, &Currency::default());

        let mut indices = presentation.index_map.as_slice().to_vec();
        assert_eq!(indices.len(), catalog.len());
        indices.sort_unstable();
        assert_eq!(indices, (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_storage_order_does_not_change_numbering() {
        let a = Catalog::from_items(vec![item("Pizza", "Main"), item("Cake", "Dessert")]).unwrap();
        let b = Catalog::from_items(vec![item("Cake", "Dessert"), item("Pizza", "Main")]).unwrap();

        let text_a = present(&a, &Currency::default()).text;
        let text_b = present(&b, &Currency::default()).text;
        assert_eq!(text_a, text_b);
    }

    #[test]
    fn test_empty_catalog() {
        let presentation = present(&Catalog::default(), &Currency::default());
        assert!(presentation.index_map.is_empty());
        assert_eq!(presentation.text, "Menu is currently empty.\n");
    }

    #[test]
    fn test_resolve_bounds() {
        let presentation = present(&Catalog::sample(), &Currency::default());
        let map = &presentation.index_map;

        assert_eq!(map.resolve(1).unwrap(), 1);
        assert_eq!(map.resolve(5).unwrap(), 2);
        for bad in [0, 6, -1, i32::MIN, i32::MAX] {
            assert!(matches!(
                map.resolve(bad),
                Err(DomainError::SelectionOutOfRange { max: 5, .. })
            ));
        }
    }
}
