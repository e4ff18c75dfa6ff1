//! # Kiosk
//!
//! A burger-shop ordering kiosk: pick items from a categorized menu, adjust the
//! cart, move to payment, confirm, start over. Also ships two small tools, a
//! divisor finder and a menu roulette.
//!
//! ## Modules
//!
//! - [`model`] - menu catalog, cart and order session data
//! - [`order_flow`] - the ordering state machine, hosted by a session actor
//! - [`clients`] - [`SessionClient`](clients::SessionClient), the async API UIs call
//! - [`render`] - render models for the menu, cart and payment screens
//! - [`lifecycle`] - [`KioskSystem`](lifecycle::KioskSystem), startup and shutdown
//! - [`config`] - TOML configuration (menu, payment methods, settings)
//! - [`divisor`] and [`roulette`] - the standalone tools
//!
//! ## Testing
//!
//! See [`session_actor::mock`] for testing clients without spawning an actor.

pub mod clients;
pub mod config;
pub mod divisor;
pub mod lifecycle;
pub mod model;
pub mod order_flow;
pub mod render;
pub mod roulette;
