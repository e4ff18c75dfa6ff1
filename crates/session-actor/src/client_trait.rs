//! # SessionAccess Trait
//!
//! Common surface for domain-specific session clients: provided `snapshot`, `close`
//! and `open_sessions` built on top of a generic [`SessionHandle`].
use crate::{FrameworkError, SessionEntity, SessionHandle};
use async_trait::async_trait;

/// Trait for domain clients that wrap a `SessionHandle`.
///
/// Implementors supply the inner handle and an error mapping; the read and close
/// operations come for free.
///
/// ```rust
/// use session_actor::{FrameworkError, SessionAccess, SessionEntity, SessionHandle};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Quiz { id: u32 }
/// #[derive(Debug)] enum QuizEvent {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct QuizError(String);
///
/// #[async_trait]
/// impl SessionEntity for Quiz {
///     type Id = u32; type Open = (); type Event = QuizEvent; type Outcome = ();
///     type Context = (); type Error = QuizError;
///     fn from_open_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn handle_event(&mut self, e: QuizEvent, _: &()) -> Result<(), Self::Error> {
///         match e {}
///     }
/// }
///
/// struct QuizClient { inner: SessionHandle<Quiz> }
///
/// #[async_trait]
/// impl SessionAccess<Quiz> for QuizClient {
///     type Error = QuizError;
///     fn inner(&self) -> &SessionHandle<Quiz> { &self.inner }
///     fn map_error(e: FrameworkError) -> QuizError { QuizError(e.to_string()) }
/// }
///
/// async fn usage(client: QuizClient) {
///     let _ = client.snapshot(1).await;
///     let _ = client.close(1).await;
/// }
/// ```
#[async_trait]
pub trait SessionAccess<T: SessionEntity>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic handle.
    fn inner(&self) -> &SessionHandle<T>;

    /// Map runtime errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Current state of a session, `None` if it is not open.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot(id).await.map_err(Self::map_error)
    }

    /// End a session.
    #[tracing::instrument(skip(self))]
    async fn close(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }

    /// Number of sessions the actor currently hosts.
    async fn open_sessions(&self) -> Result<usize, Self::Error> {
        self.inner().count().await.map_err(Self::map_error)
    }
}
