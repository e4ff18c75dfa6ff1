//! # Order Flow
//!
//! The kiosk's two-screen ordering state machine, hosted by a
//! [`SessionActor`](session_actor::SessionActor).
//!
//! ## Structure
//!
//! - [`entity`] - transitions ([`OrderSession::apply`]) and the
//!   [`SessionEntity`](session_actor::SessionEntity) implementation
//! - [`events`] - [`OrderEvent`] inputs and [`Notice`] acknowledgments
//! - [`error`] - [`OrderFlowError`]
//! - [`new()`] - creates the actor and a [`SessionClient`]
//! - [`reduce()`] - the same transitions as a pure function
//!
//! ## Usage
//!
//! ```rust
//! use kiosk::config::KioskConfig;
//! use kiosk::order_flow;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(KioskConfig::embedded()?.catalog()?);
//!     let (actor, client) = order_flow::new(32, catalog);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.open_session().await?;
//!     client.add_menu_item(id, "불고기 버거").await?;
//!     client.add_menu_item(id, "불고기 버거").await?;
//!     client.proceed_to_payment(id).await?;
//!     client.confirm_payment(id, "신용카드 / 체크카드").await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod events;

pub use error::*;
pub use events::*;

use crate::clients::SessionClient;
use crate::model::{MenuCatalog, OrderSession};
use session_actor::SessionActor;
use std::sync::Arc;

/// Creates a new order session actor and its client.
pub fn new(
    buffer_size: usize,
    catalog: Arc<MenuCatalog>,
) -> (SessionActor<OrderSession>, SessionClient) {
    let (actor, handle) = SessionActor::new(buffer_size);
    (actor, SessionClient::new(handle, catalog))
}

/// Applies `event` to `session` and returns the resulting session.
///
/// On error the returned session equals the input.
pub fn reduce(
    mut session: OrderSession,
    event: OrderEvent,
) -> (OrderSession, Result<Notice, OrderFlowError>) {
    let result = session.apply(event);
    (session, result)
}
