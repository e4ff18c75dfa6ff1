use crate::model::{Cart, CartLine};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for order sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Which screen the kiosk shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Menu and cart.
    #[default]
    Selecting,
    /// Order summary and payment method choice.
    Paying,
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Selecting => write!(f, "selecting"),
            Screen::Paying => write!(f, "paying"),
        }
    }
}

/// One customer's order in progress.
///
/// # Session Actor
/// `OrderSession` implements [`SessionEntity`](session_actor::SessionEntity) (see
/// [`order_flow`](crate::order_flow)) and is hosted by a
/// [`SessionActor`](session_actor::SessionActor). The only way it changes is by
/// dispatching an [`OrderEvent`](crate::order_flow::OrderEvent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSession {
    pub(crate) id: SessionId,
    pub(crate) cart: Cart,
    pub(crate) screen: Screen,
}

impl OrderSession {
    /// A fresh session: empty cart, menu screen.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            cart: Cart::new(),
            screen: Screen::Selecting,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn total(&self) -> u64 {
        self.cart.total()
    }
}

/// What was paid for, handed back when an order completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub method: String,
    pub lines: Vec<CartLine>,
    pub total: u64,
}
