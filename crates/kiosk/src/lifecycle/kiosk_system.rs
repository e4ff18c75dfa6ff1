use crate::clients::SessionClient;
use crate::config::{ConfigError, KioskConfig};
use crate::model::MenuCatalog;
use crate::order_flow;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for the kiosk.
///
/// `KioskSystem` is responsible for:
/// - **Startup**: building the menu from configuration and spawning the order
///   session actor
/// - **Access**: handing out the [`SessionClient`] and the payment methods
/// - **Shutdown**: closing the actor's channel and waiting for it to finish
///
/// # Example
///
/// ```ignore
/// let system = KioskSystem::new(KioskConfig::from_env()?)?;
///
/// let id = system.client.open_session().await?;
/// system.client.add_menu_item(id, "불고기 버거").await?;
///
/// system.shutdown().await?;
/// ```
pub struct KioskSystem {
    /// Client for the order session actor
    pub client: SessionClient,

    config: KioskConfig,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KioskSystem {
    /// Builds the catalog and starts the order session actor.
    ///
    /// Must be called inside a Tokio runtime.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the configuration does not validate.
    pub fn new(config: KioskConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = Arc::new(config.catalog()?);

        let (actor, client) = order_flow::new(config.session.buffer_size, catalog.clone());
        // Order sessions have no dependencies (Context = ())
        let handle = tokio::spawn(actor.run(()));

        info!(
            categories = catalog.categories().len(),
            items = catalog.item_count(),
            payment_methods = config.payment_methods.len(),
            "Kiosk started"
        );

        Ok(Self {
            client,
            config,
            handles: vec![handle],
        })
    }

    /// Starts the kiosk with the bundled configuration.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(KioskConfig::embedded()?)
    }

    pub fn catalog(&self) -> &MenuCatalog {
        self.client.catalog()
    }

    pub fn payment_methods(&self) -> &[String] {
        &self.config.payment_methods
    }

    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    /// Gracefully shuts down the kiosk.
    ///
    /// Dropping the client closes the actor's channel; the actor logs its final
    /// state and exits. Any clone of the client still alive elsewhere keeps the
    /// actor running, and this call waits for it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every actor shut down cleanly
    /// - `Err(String)` if an actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down kiosk...");

        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Kiosk shutdown complete.");
        Ok(())
    }
}
