//! The cart: ordered line items, one per distinct menu item name.
//!
//! Invariants kept by every operation:
//! - no two lines share a name
//! - every line has `quantity >= 1` (a line that would drop to zero is removed)
//!
//! The total is computed from the lines on every call and never cached.

use crate::model::MenuItem;
use serde::{Deserialize, Serialize};

/// One menu item in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// A row from an edited cart table. Quantities of zero or less mean "drop".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRow {
    pub name: String,
    pub quantity: i64,
    pub unit_price: u64,
}

impl CartRow {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

impl From<&CartLine> for CartRow {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: i64::from(line.quantity),
            unit_price: line.unit_price,
        }
    }
}

/// What a quantity edit did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity reached zero or less and the line was removed.
    Removed,
    /// No line with that name; nothing changed.
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// `Σ unit_price × quantity`, recomputed on every call.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Adds one of `item`, returning the line's quantity afterwards.
    ///
    /// An existing line with the same name is incremented; its price stays what
    /// it was when the line was created.
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == item.name) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: 1,
        });
        1
    }

    /// Overwrites a line's quantity. Zero or less removes the line.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> QuantityChange {
        let Some(index) = self.lines.iter().position(|line| line.name == name) else {
            return QuantityChange::Missing;
        };
        if quantity <= 0 {
            self.lines.remove(index);
            return QuantityChange::Removed;
        }
        let quantity = clamp_quantity(quantity);
        self.lines[index].quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    /// Adds `delta` (possibly negative) to a line's quantity.
    pub fn change_quantity(&mut self, name: &str, delta: i64) -> QuantityChange {
        let Some(line) = self.line(name) else {
            return QuantityChange::Missing;
        };
        let target = i64::from(line.quantity).saturating_add(delta);
        self.set_quantity(name, target)
    }

    /// Removes a line. Returns `false` if there was none.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.name != name);
        self.lines.len() != before
    }

    /// Rebuilds the cart from an edited table.
    ///
    /// Rows are taken in order and rows with a quantity of zero or less are
    /// dropped. Nothing from the previous cart survives unless the snapshot
    /// carries it. A name repeated in the snapshot is folded into its first row:
    /// quantities add up and the first row's price is kept.
    pub fn replace_from_snapshot<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = CartRow>,
    {
        let mut lines: Vec<CartLine> = Vec::new();
        for row in rows.into_iter().filter(|row| row.quantity > 0) {
            let quantity = clamp_quantity(row.quantity);
            match lines.iter_mut().find(|line| line.name == row.name) {
                Some(line) => line.quantity = line.quantity.saturating_add(quantity),
                None => lines.push(CartLine {
                    name: row.name,
                    unit_price: row.unit_price,
                    quantity,
                }),
            }
        }
        self.lines = lines;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Empties the cart and hands back what was in it.
    pub fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}

// Callers only pass positive values.
fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity).unwrap_or(u32::MAX)
}
