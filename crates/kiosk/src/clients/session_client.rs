//! # Session Client
//!
//! High-level API for driving kiosk order sessions. Wraps a
//! `SessionHandle<OrderSession>` and turns runtime errors back into
//! [`OrderFlowError`].
use crate::model::{CartRow, MenuCatalog, MenuItem, OrderSession, SessionId};
use crate::order_flow::{Notice, OrderEvent, OrderFlowError};
use crate::render::View;
use async_trait::async_trait;
use session_actor::{FrameworkError, SessionAccess, SessionHandle};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the order session actor.
///
/// Holds the menu so callers can add items by name.
#[derive(Clone)]
pub struct SessionClient {
    inner: SessionHandle<OrderSession>,
    catalog: Arc<MenuCatalog>,
}

impl SessionClient {
    pub fn new(inner: SessionHandle<OrderSession>, catalog: Arc<MenuCatalog>) -> Self {
        Self { inner, catalog }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Opens a session with an empty cart on the menu screen.
    #[instrument(skip(self))]
    pub async fn open_session(&self) -> Result<SessionId, OrderFlowError> {
        debug!("Sending request");
        let id = self.inner.open(()).await.map_err(Self::map_error)?;
        info!(%id, "Session opened");
        Ok(id)
    }

    #[instrument(skip(self, item), fields(item = %item.name))]
    pub async fn add_item(&self, id: SessionId, item: MenuItem) -> Result<Notice, OrderFlowError> {
        self.send(id, OrderEvent::AddItem(item)).await
    }

    /// Looks `name` up in the menu and adds one of it.
    #[instrument(skip(self))]
    pub async fn add_menu_item(&self, id: SessionId, name: &str) -> Result<Notice, OrderFlowError> {
        let item = self
            .catalog
            .find(name)
            .cloned()
            .ok_or_else(|| OrderFlowError::UnknownMenuItem(name.to_string()))?;
        self.send(id, OrderEvent::AddItem(item)).await
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        id: SessionId,
        name: &str,
        quantity: i64,
    ) -> Result<Notice, OrderFlowError> {
        let event = OrderEvent::SetQuantity {
            name: name.to_string(),
            quantity,
        };
        self.send(id, event).await
    }

    #[instrument(skip(self))]
    pub async fn change_quantity(
        &self,
        id: SessionId,
        name: &str,
        delta: i64,
    ) -> Result<Notice, OrderFlowError> {
        let event = OrderEvent::ChangeQuantity {
            name: name.to_string(),
            delta,
        };
        self.send(id, event).await
    }

    /// Replaces the cart with the rows of an edited cart table.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn apply_table_edit(
        &self,
        id: SessionId,
        rows: Vec<CartRow>,
    ) -> Result<Notice, OrderFlowError> {
        self.send(id, OrderEvent::ReplaceCart(rows)).await
    }

    #[instrument(skip(self))]
    pub async fn proceed_to_payment(&self, id: SessionId) -> Result<Notice, OrderFlowError> {
        self.send(id, OrderEvent::ProceedToPayment).await
    }

    #[instrument(skip(self))]
    pub async fn confirm_payment(
        &self,
        id: SessionId,
        method: &str,
    ) -> Result<Notice, OrderFlowError> {
        let event = OrderEvent::ConfirmPayment {
            method: method.to_string(),
        };
        self.send(id, event).await
    }

    #[instrument(skip(self))]
    pub async fn back_to_menu(&self, id: SessionId) -> Result<Notice, OrderFlowError> {
        self.send(id, OrderEvent::BackToMenu).await
    }

    /// Ends a session. Fails with `SessionNotFound` if it is not open.
    pub async fn close_session(&self, id: SessionId) -> Result<(), OrderFlowError> {
        self.close(id).await
    }

    /// Render model for the session's current screen.
    #[instrument(skip(self, payment_methods))]
    pub async fn view(
        &self,
        id: SessionId,
        payment_methods: &[String],
    ) -> Result<View, OrderFlowError> {
        let session = self
            .snapshot(id)
            .await?
            .ok_or_else(|| OrderFlowError::SessionNotFound(id.to_string()))?;
        Ok(View::render(&session, &self.catalog, payment_methods))
    }

    async fn send(&self, id: SessionId, event: OrderEvent) -> Result<Notice, OrderFlowError> {
        debug!(%id, event = event.name(), "Sending request");
        self.inner.dispatch(id, event).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl SessionAccess<OrderSession> for SessionClient {
    type Error = OrderFlowError;

    fn inner(&self) -> &SessionHandle<OrderSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderFlowError::SessionNotFound(id),
            other => other
                .into_entity_error::<OrderFlowError>()
                .unwrap_or_else(|e| OrderFlowError::ActorCommunicationError(e.to_string())),
        }
    }
}
