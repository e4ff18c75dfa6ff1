//! Transition logic for [`OrderSession`] and its [`SessionEntity`] implementation.
//!
//! | From | Event | To |
//! |---|---|---|
//! | Selecting | cart edits | Selecting |
//! | Selecting | `ProceedToPayment` (cart not empty) | Paying |
//! | Paying | `ConfirmPayment` | Selecting, cart cleared |
//! | Paying | `BackToMenu` | Selecting, cart kept |
//!
//! Anything else is rejected with [`OrderFlowError::UnexpectedEvent`]. All
//! guards run before the session is touched, so a rejected event leaves it as
//! it was.

use super::error::OrderFlowError;
use super::events::{Notice, OrderEvent};
use crate::model::{OrderSession, QuantityChange, Receipt, Screen, SessionId};
use async_trait::async_trait;
use session_actor::SessionEntity;
use tracing::{info, warn};

impl OrderSession {
    /// Applies one event in place.
    ///
    /// # Errors
    /// - [`OrderFlowError::EmptyCart`] for `ProceedToPayment` with an empty cart
    /// - [`OrderFlowError::UnexpectedEvent`] for events the current screen does
    ///   not accept
    pub fn apply(&mut self, event: OrderEvent) -> Result<Notice, OrderFlowError> {
        match (self.screen, event) {
            (Screen::Selecting, OrderEvent::AddItem(item)) => {
                let quantity = self.cart.add_item(&item);
                Ok(Notice::Added {
                    name: item.name,
                    quantity,
                })
            }
            (Screen::Selecting, OrderEvent::SetQuantity { name, quantity }) => {
                let change = self.cart.set_quantity(&name, quantity);
                Ok(quantity_notice(name, change))
            }
            (Screen::Selecting, OrderEvent::ChangeQuantity { name, delta }) => {
                let change = self.cart.change_quantity(&name, delta);
                Ok(quantity_notice(name, change))
            }
            (Screen::Selecting, OrderEvent::ReplaceCart(rows)) => {
                self.cart.replace_from_snapshot(rows);
                Ok(Notice::CartReplaced {
                    lines: self.cart.len(),
                    total: self.cart.total(),
                })
            }
            (Screen::Selecting, OrderEvent::ProceedToPayment) => {
                if self.cart.is_empty() {
                    return Err(OrderFlowError::EmptyCart);
                }
                self.screen = Screen::Paying;
                Ok(Notice::MovedToPayment {
                    total: self.cart.total(),
                })
            }
            (Screen::Paying, OrderEvent::ConfirmPayment { method }) => {
                let total = self.cart.total();
                let lines = self.cart.take_lines();
                self.screen = Screen::Selecting;
                Ok(Notice::OrderCompleted(Receipt {
                    method,
                    lines,
                    total,
                }))
            }
            (Screen::Paying, OrderEvent::BackToMenu) => {
                self.screen = Screen::Selecting;
                Ok(Notice::BackToMenu)
            }
            (screen, event) => Err(OrderFlowError::UnexpectedEvent {
                event: event.name(),
                screen,
            }),
        }
    }
}

fn quantity_notice(name: String, change: QuantityChange) -> Notice {
    match change {
        QuantityChange::Updated(quantity) => Notice::QuantityChanged { name, quantity },
        QuantityChange::Removed => Notice::Removed { name },
        QuantityChange::Missing => Notice::Unchanged { name },
    }
}

#[async_trait]
impl SessionEntity for OrderSession {
    type Id = SessionId;
    type Open = ();
    type Event = OrderEvent;
    type Outcome = Notice;
    type Context = ();
    type Error = OrderFlowError;

    fn from_open_params(id: SessionId, _params: ()) -> Result<Self, Self::Error> {
        Ok(Self::new(id))
    }

    async fn handle_event(
        &mut self,
        event: OrderEvent,
        _ctx: &Self::Context,
    ) -> Result<Notice, Self::Error> {
        let notice = self.apply(event)?;
        if let Notice::OrderCompleted(receipt) = &notice {
            info!(
                session = %self.id,
                method = %receipt.method,
                total = receipt.total,
                "Order completed"
            );
        }
        Ok(notice)
    }

    async fn on_close(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if !self.cart.is_empty() {
            warn!(
                session = %self.id,
                lines = self.cart.len(),
                total = self.cart.total(),
                "Closing session with an unpaid cart"
            );
        }
        Ok(())
    }
}
