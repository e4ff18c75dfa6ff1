//! # SessionEntity Trait
//!
//! The `SessionEntity` trait is the contract every kind of session (a kiosk order,
//! a quiz round, ...) implements to be hosted by the generic [`SessionActor`](crate::SessionActor).
//! It names the id, open parameters, events, outcomes, context and error types, and
//! provides the lifecycle hooks (`on_open`, `handle_event`, `on_close`).
//!
//! # Event Semantics
//! A session only changes through [`SessionEntity::handle_event`]. The actor applies
//! events one at a time and restores the previous state when the hook returns an
//! error, so a rejected event never leaves a half-applied session behind.
//!
//! # Provided Methods (Hooks)
//! - [`SessionEntity::on_open`]
//! - [`SessionEntity::on_close`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any session type must implement to be hosted by `SessionActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may call other actors. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`, not when
/// it is constructed.
#[async_trait]
pub trait SessionEntity: Clone + Send + Sync + 'static {
    /// Session identifier. Generated by the actor from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Parameters used to open a new session.
    type Open: Send + Sync + Debug;

    /// Input events the session reacts to.
    type Event: Send + Sync + Debug;

    /// What a successfully applied event reports back to the caller.
    type Outcome: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// The error type for this session kind.
    ///
    /// One enum covers every event. Callers match on a single type instead of one
    /// per event.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the initial session state. Called synchronously before `on_open`.
    fn from_open_params(id: Self::Id, params: Self::Open) -> Result<Self, Self::Error>;

    /// Called right after the session is constructed, before it is stored.
    async fn on_open(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one event to the session.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Called before the session is dropped from the actor.
    async fn on_close(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
