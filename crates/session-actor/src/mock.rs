//! # Mock Sessions & Testing Guide
//!
//! `MockSessions<T>` hands out a real [`SessionHandle<T>`] whose requests are answered
//! from a queue of expectations instead of a running actor. Domain clients can be
//! unit tested this way without any session state.
//!
//! | | MockSessions | Real SessionActor |
//! |---|---|---|
//! | **State** | none, canned replies | real sessions |
//! | **Error injection** | `return_err` | needs a real failing event |
//! | **Use case** | logic *around* the handle | the entity itself, full flows |
//!
//! Two styles are available:
//!
//! - the fluent [`MockSessions`] API (`expect_open`, `expect_dispatch`, ...,
//!   then `verify`);
//! - the raw [`create_mock_handle`] + [`expect_dispatch`] helpers, when a test
//!   wants to inspect the exact event that was sent before replying.
//!
//! ```rust
//! use session_actor::mock::MockSessions;
//! use session_actor::{FrameworkError, SessionEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Quiz { id: u32 }
//! #[derive(Debug)] struct Answer(u8);
//! #[derive(Debug, thiserror::Error)] #[error("wrong")] struct Wrong;
//!
//! #[async_trait]
//! impl SessionEntity for Quiz {
//!     type Id = u32; type Open = (); type Event = Answer; type Outcome = bool;
//!     type Context = (); type Error = Wrong;
//!     fn from_open_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn handle_event(&mut self, a: Answer, _: &()) -> Result<bool, Self::Error> {
//!         Ok(a.0 == 42)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockSessions::<Quiz>::new();
//!     mock.expect_open().return_ok(7);
//!     mock.expect_dispatch(7).return_err(FrameworkError::ActorClosed);
//!
//!     let handle = mock.handle();
//!     assert_eq!(handle.open(()).await.unwrap(), 7);
//!     assert!(matches!(handle.dispatch(7, Answer(1)).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::SessionHandle;
use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use crate::message::SessionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the reply to give it.
enum Expectation<T: SessionEntity> {
    Open {
        response: Result<T::Id, FrameworkError>,
    },
    Snapshot {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Dispatch {
        id: T::Id,
        response: Result<T::Outcome, FrameworkError>,
    },
    Close {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A session handle backed by queued expectations.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (kind or id) panics the background task, and the caller sees
/// `FrameworkError::ActorDropped`.
pub struct MockSessions<T: SessionEntity> {
    handle: SessionHandle<T>,
    expectations: Queue<T>,
    _task: tokio::task::JoinHandle<()>,
}

impl<T: SessionEntity> Default for MockSessions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SessionEntity> MockSessions<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                match (request, next) {
                    (
                        SessionRequest::Open { respond_to, .. },
                        Some(Expectation::Open { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Snapshot { id, respond_to },
                        Some(Expectation::Snapshot { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Dispatch { id, respond_to, .. },
                        Some(Expectation::Dispatch { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Close { id, respond_to },
                        Some(Expectation::Close { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            handle: SessionHandle::new(sender),
            expectations,
            _task: task,
        }
    }

    /// Returns a handle wired to this mock.
    pub fn handle(&self) -> SessionHandle<T> {
        self.handle.clone()
    }

    pub fn expect_open(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Open { response }
        })
    }

    pub fn expect_snapshot(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Snapshot { id, response }
        })
    }

    pub fn expect_dispatch(&mut self, id: T::Id) -> ExpectationBuilder<T, T::Outcome> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Dispatch { id, response }
        })
    }

    pub fn expect_close(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Close { id, response }
        })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods; pick the reply with
/// `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: SessionEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: SessionEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a handle plus the receiver its requests arrive on.
///
/// Use with [`expect_dispatch`] or [`expect_snapshot`] to assert on what was sent
/// and reply manually.
pub fn create_mock_handle<T: SessionEntity>(
    buffer_size: usize,
) -> (SessionHandle<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionHandle::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Dispatch.
pub async fn expect_dispatch<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(
    T::Id,
    T::Event,
    oneshot::Sender<Result<T::Outcome, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::Dispatch {
            id,
            event,
            respond_to,
        }) => Some((id, event, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Snapshot.
pub async fn expect_snapshot<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Snapshot { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
