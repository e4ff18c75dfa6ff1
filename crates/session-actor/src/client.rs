//! # Session Handle
//!
//! The cloneable client half of a [`SessionActor`](crate::SessionActor).

use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use crate::message::SessionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, async handle for talking to a `SessionActor`.
///
/// Holds only the sender half of the request channel, so cloning is cheap and a
/// handle can be shared across tasks. Every call sends one request and awaits the
/// reply on a oneshot channel.
pub struct SessionHandle<T: SessionEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

// Manual impl: `T` itself does not need to be `Clone` for the sender to be.
impl<T: SessionEntity> Clone for SessionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: SessionEntity> SessionHandle<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn open(&self, params: T::Open) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Open { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn dispatch(&self, id: T::Id, event: T::Event) -> Result<T::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Dispatch {
                id,
                event,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn close(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Close { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Count { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
