//! Events an order session reacts to, and the notices it answers with.
//!
//! Every UI interaction maps to one [`OrderEvent`]. A successfully applied event
//! reports a [`Notice`] that the UI shows inline (a toast, a banner, the receipt).

use crate::model::{CartRow, MenuItem, Receipt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    /// Add one of this item. The name and price are copied into the cart.
    AddItem(MenuItem),
    /// Overwrite a line's quantity; zero or less removes it.
    SetQuantity { name: String, quantity: i64 },
    /// Add `delta` to a line's quantity.
    ChangeQuantity { name: String, delta: i64 },
    /// Replace the cart with the rows of an edited cart table.
    ReplaceCart(Vec<CartRow>),
    ProceedToPayment,
    /// Pay with the given method. Any label is accepted.
    ConfirmPayment { method: String },
    /// Leave the payment screen, keeping the cart.
    BackToMenu,
}

impl OrderEvent {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::AddItem(_) => "AddItem",
            OrderEvent::SetQuantity { .. } => "SetQuantity",
            OrderEvent::ChangeQuantity { .. } => "ChangeQuantity",
            OrderEvent::ReplaceCart(_) => "ReplaceCart",
            OrderEvent::ProceedToPayment => "ProceedToPayment",
            OrderEvent::ConfirmPayment { .. } => "ConfirmPayment",
            OrderEvent::BackToMenu => "BackToMenu",
        }
    }
}

/// Acknowledgment of an applied event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An item was added; `quantity` is the line's quantity afterwards.
    Added { name: String, quantity: u32 },
    QuantityChanged { name: String, quantity: u32 },
    Removed { name: String },
    /// The edit named a line that is not in the cart.
    Unchanged { name: String },
    CartReplaced { lines: usize, total: u64 },
    MovedToPayment { total: u64 },
    BackToMenu,
    OrderCompleted(Receipt),
}
