//! # Session Actor
//!
//! The `SessionActor` owns every open session of one kind and applies requests to
//! them strictly one at a time. It is the only place session state lives, which is
//! what lets the entities themselves stay plain structs with no locking.

use crate::client::SessionHandle;
use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use crate::message::SessionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that hosts a collection of sessions.
///
/// # Concurrency Model
/// Each actor runs in its own Tokio task and processes its requests sequentially,
/// so the `sessions` map needs no `Mutex`. Many handles may send concurrently; the
/// channel serialises them.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SessionActor::new(buffer)` returns the actor and a [`SessionHandle`].
/// 2.  **Wire & Run**: spawn `actor.run(context)` with the entity's dependencies.
/// 3.  **Use**: clone the handle wherever sessions are driven from.
///
/// ```rust
/// use session_actor::{SessionActor, SessionEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, hits: u32 }
/// #[derive(Debug)] struct Hit;
/// #[derive(Debug, thiserror::Error)] #[error("never")] struct Never;
///
/// #[async_trait]
/// impl SessionEntity for Counter {
///     type Id = u32;
///     type Open = ();
///     type Event = Hit;
///     type Outcome = u32;
///     type Context = ();
///     type Error = Never;
///
///     fn from_open_params(id: u32, _: ()) -> Result<Self, Self::Error> {
///         Ok(Self { id, hits: 0 })
///     }
///     async fn handle_event(&mut self, _: Hit, _: &()) -> Result<u32, Self::Error> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, handle) = SessionActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = handle.open(()).await.unwrap();
///     assert_eq!(handle.dispatch(id, Hit).await.unwrap(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **Open**: next id from the counter, `from_open_params`, `on_open`, insert.
///   Fails with [`FrameworkError::IdsExhausted`] once the counter has run out.
/// * **Snapshot**: clone of the stored session, or `None`.
/// * **Dispatch**: `handle_event` on the stored session. On error the session is
///   restored to its pre-event state before the error is returned.
/// * **Close**: `on_close`, then remove.
/// * **Count**: number of open sessions.
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    sessions: HashMap<T::Id, T>,
    // `None` once every id has been handed out
    next_id: Option<u32>,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates a new `SessionActor` and its associated `SessionHandle`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// handle calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, SessionHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: Some(1),
        };
        (actor, SessionHandle::new(sender))
    }

    /// Runs the actor's event loop until every handle has been dropped.
    ///
    /// The `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let session_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(session_type, "Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { params, respond_to } => {
                    debug!(session_type, ?params, "Open");
                    let Some(raw_id) = self.next_id else {
                        warn!(session_type, "No session ids left");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw_id.checked_add(1);
                    let id = T::Id::from(raw_id);

                    let mut session = match T::from_open_params(id.clone(), params) {
                        Ok(session) => session,
                        Err(e) => {
                            warn!(session_type, %id, error = %e, "Open failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = session.on_open(&context).await {
                        warn!(session_type, %id, error = %e, "on_open failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.sessions.insert(id.clone(), session);
                    info!(session_type, %id, open = self.sessions.len(), "Opened");
                    let _ = respond_to.send(Ok(id));
                }
                SessionRequest::Snapshot { id, respond_to } => {
                    let session = self.sessions.get(&id).cloned();
                    debug!(session_type, %id, found = session.is_some(), "Snapshot");
                    let _ = respond_to.send(Ok(session));
                }
                SessionRequest::Dispatch {
                    id,
                    event,
                    respond_to,
                } => {
                    debug!(session_type, %id, ?event, "Dispatch");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(session_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let before = session.clone();
                    match session.handle_event(event, &context).await {
                        Ok(outcome) => {
                            info!(session_type, %id, ?outcome, "Event applied");
                            let _ = respond_to.send(Ok(outcome));
                        }
                        Err(e) => {
                            *session = before;
                            warn!(session_type, %id, error = %e, "Event rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                SessionRequest::Close { id, respond_to } => {
                    debug!(session_type, %id, "Close");
                    let Some(session) = self.sessions.get(&id) else {
                        warn!(session_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = session.on_close(&context).await {
                        warn!(session_type, %id, error = %e, "on_close failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.sessions.remove(&id);
                    info!(session_type, %id, open = self.sessions.len(), "Closed");
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.sessions.len()));
                }
            }
        }

        info!(session_type, open = self.sessions.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug)]
    struct Ticket {
        id: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("ticket error")]
    struct TicketError;

    #[async_trait]
    impl SessionEntity for Ticket {
        type Id = u32;
        type Open = ();
        type Event = ();
        type Outcome = u32;
        type Context = ();
        type Error = TicketError;

        fn from_open_params(id: u32, _: ()) -> Result<Self, Self::Error> {
            Ok(Self { id })
        }

        async fn handle_event(&mut self, _: (), _ctx: &()) -> Result<u32, Self::Error> {
            Ok(self.id)
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let (actor, handle) = SessionActor::<Ticket>::new(4);
        tokio::spawn(actor.run(()));

        assert_eq!(handle.open(()).await.unwrap(), 1);
        assert_eq!(handle.open(()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_open_fails_once_ids_run_out() {
        let (mut actor, handle) = SessionActor::<Ticket>::new(4);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run(()));

        let last = handle.open(()).await.unwrap();
        assert_eq!(last, u32::MAX);
        assert_eq!(handle.dispatch(last, ()).await.unwrap(), u32::MAX);

        let result = handle.open(()).await;
        assert!(matches!(result, Err(FrameworkError::IdsExhausted)));
        assert_eq!(handle.count().await.unwrap(), 1);
    }
}
