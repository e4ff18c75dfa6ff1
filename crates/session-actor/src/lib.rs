//! # Session Actor
//!
//! Building blocks for hosting many small, independent interactive sessions (a kiosk
//! order, a quiz round, a form wizard) inside one Tokio task.
//!
//! Each session is a plain struct that implements [`SessionEntity`]. A
//! [`SessionActor`] owns all sessions of one kind, generates their ids, and applies
//! events to them strictly one at a time. Callers talk to it through a cloneable
//! [`SessionHandle`].
//!
//! ## Why an actor?
//!
//! Interactive front-ends deliver one event at a time per session and re-read the
//! session after every event. Keeping all session state behind a single message
//! loop gives exactly that shape:
//!
//! - **Exclusive ownership**: only the actor touches session state, no locks.
//! - **Atomic events**: an event either applies fully or the session is restored.
//! - **Idempotent reads**: `snapshot` returns a clone and never mutates.
//!
//! ## Layers
//!
//! 1. **Entity** ([`SessionEntity`]) - domain state and its transitions
//! 2. **Runtime** ([`SessionActor`]) - message loop, id generation, rollback
//! 3. **Interface** ([`SessionHandle`], [`SessionAccess`]) - typed async client
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)`, not to `new()`. Actors can be
//! created first and wired together afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module answers handle requests from canned expectations, so domain
//! clients can be tested without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod telemetry;

pub use actor::SessionActor;
pub use client::SessionHandle;
pub use client_trait::SessionAccess;
pub use entity::SessionEntity;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
