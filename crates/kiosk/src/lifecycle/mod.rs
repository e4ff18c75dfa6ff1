//! # Kiosk Lifecycle
//!
//! Starting, wiring and stopping the kiosk's actors.
//!
//! ## Startup
//!
//! [`KioskSystem::new`] validates the configuration, builds the
//! [`MenuCatalog`](crate::model::MenuCatalog), creates the order session actor with
//! [`order_flow::new`](crate::order_flow::new) and spawns it with its context:
//!
//! ```rust,ignore
//! let (actor, client) = order_flow::new(config.session.buffer_size, catalog);
//! let handle = tokio::spawn(actor.run(()));
//! ```
//!
//! Dependencies go to `run(context)`, not to `new()`. Order sessions need none,
//! so the context is `()`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - including how many sessions were still open
//! 4. **Await completion** - [`KioskSystem::shutdown`] joins the task
//!
//! Requests already queued are handled before the actor stops.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](session_actor::telemetry::setup_tracing) once at startup.
//!
//! ```bash
//! RUST_LOG=info cargo run -p kiosk     # Lifecycle and completed orders
//! RUST_LOG=debug cargo run -p kiosk    # Every request and event
//! ```

pub mod kiosk_system;

pub use kiosk_system::*;
