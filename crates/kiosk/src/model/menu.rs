use crate::config::{CategoryConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A dish or drink on the menu.
///
/// Items are owned by the [`MenuCatalog`] and never change after it is loaded. A
/// cart copies the name and price at add time, so later catalog edits do not
/// reach lines that are already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Whole won.
    pub unit_price: u64,
    pub description: String,
    pub category: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        unit_price: u64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            description: description.into(),
            category: category.into(),
        }
    }
}

/// A named group of menu items, shown as one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Read-only menu, in the order categories and items were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    categories: Vec<Category>,
}

impl MenuCatalog {
    /// Builds the catalog from configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the menu is empty, a category or item
    /// name is blank, a category has no items, or two items share a name. Cart
    /// lines are keyed by item name, so names must be unique across categories.
    pub fn from_config(categories: &[CategoryConfig]) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::Invalid("menu has no categories".to_string()));
        }

        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(categories.len());
        for category in categories {
            let category_name = category.name.trim();
            if category_name.is_empty() {
                return Err(ConfigError::Invalid("category name must not be blank".to_string()));
            }
            if category.items.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "category {category_name:?} has no items"
                )));
            }

            let mut items = Vec::with_capacity(category.items.len());
            for item in &category.items {
                let item_name = item.name.trim();
                if item_name.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "item in category {category_name:?} has a blank name"
                    )));
                }
                if !seen.insert(item_name.to_string()) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate menu item {item_name:?}"
                    )));
                }
                items.push(MenuItem::new(
                    item_name,
                    item.price,
                    item.description.trim(),
                    category_name,
                ));
            }

            built.push(Category {
                name: category_name.to_string(),
                items,
            });
        }

        Ok(Self { categories: built })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Items of one category, `None` if there is no such category.
    pub fn items(&self, category: &str) -> Option<&[MenuItem]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
    }

    /// Looks an item up by name across all categories.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.name == name)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
