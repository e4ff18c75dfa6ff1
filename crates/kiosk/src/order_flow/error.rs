//! Error types for the order flow.

use crate::model::Screen;
use thiserror::Error;

/// Errors that can occur while driving an order session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderFlowError {
    /// Tried to go to payment with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The event has no transition from the current screen.
    #[error("Event {event} is not accepted while {screen}")]
    UnexpectedEvent { event: &'static str, screen: Screen },

    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// An error occurred while communicating with the session actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
