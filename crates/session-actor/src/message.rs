//! # Session Messages
//!
//! Requests sent from a [`SessionHandle`](crate::SessionHandle) to a
//! [`SessionActor`](crate::SessionActor), each carrying a oneshot channel for the reply.

use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Open**: start a session from [`SessionEntity::Open`] parameters.
/// - **Snapshot**: read a clone of the current session state. Pure read.
/// - **Dispatch**: apply one [`SessionEntity::Event`].
/// - **Close**: end a session and drop its state.
/// - **Count**: number of open sessions.
#[derive(Debug)]
pub enum SessionRequest<T: SessionEntity> {
    Open {
        params: T::Open,
        respond_to: Response<T::Id>,
    },
    Snapshot {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Dispatch {
        id: T::Id,
        event: T::Event,
        respond_to: Response<T::Outcome>,
    },
    Close {
        id: T::Id,
        respond_to: Response<()>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
