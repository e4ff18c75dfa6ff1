use async_trait::async_trait;
use session_actor::{FrameworkError, SessionActor, SessionEntity};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Basket {
    id: u32,
    owner: String,
    items: Vec<String>,
    checked_out: bool,
}

#[derive(Debug)]
struct BasketOpen {
    owner: String,
}

#[derive(Debug)]
enum BasketEvent {
    Put(String),
    Checkout,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum BasketError {
    #[error("basket is empty")]
    Empty,
    #[error("owner must not be blank")]
    BlankOwner,
}

#[async_trait]
impl SessionEntity for Basket {
    type Id = u32;
    type Open = BasketOpen;
    type Event = BasketEvent;
    type Outcome = usize;
    type Context = ();
    type Error = BasketError;

    fn from_open_params(id: u32, params: BasketOpen) -> Result<Self, Self::Error> {
        if params.owner.trim().is_empty() {
            return Err(BasketError::BlankOwner);
        }
        Ok(Self {
            id,
            owner: params.owner,
            items: Vec::new(),
            checked_out: false,
        })
    }

    async fn handle_event(
        &mut self,
        event: BasketEvent,
        _ctx: &Self::Context,
    ) -> Result<usize, Self::Error> {
        match event {
            BasketEvent::Put(item) => {
                self.items.push(item);
                Ok(self.items.len())
            }
            BasketEvent::Checkout => {
                // Mutates before failing so the rollback is observable.
                self.checked_out = true;
                if self.items.is_empty() {
                    return Err(BasketError::Empty);
                }
                Ok(self.items.len())
            }
        }
    }
}

fn open(owner: &str) -> BasketOpen {
    BasketOpen {
        owner: owner.to_string(),
    }
}

#[tokio::test]
async fn test_open_dispatch_snapshot_close() {
    let (actor, handle) = SessionActor::<Basket>::new(10);
    let task = tokio::spawn(actor.run(()));

    let id = handle.open(open("Alice")).await.unwrap();
    assert_eq!(id, 1);

    assert_eq!(handle.dispatch(id, BasketEvent::Put("cola".into())).await.unwrap(), 1);
    assert_eq!(handle.dispatch(id, BasketEvent::Put("fries".into())).await.unwrap(), 2);

    let basket = handle.snapshot(id).await.unwrap().unwrap();
    assert_eq!(basket.owner, "Alice");
    assert_eq!(basket.items, vec!["cola", "fries"]);

    // Snapshots are pure reads
    let again = handle.snapshot(id).await.unwrap().unwrap();
    assert_eq!(basket, again);

    handle.close(id).await.unwrap();
    assert!(handle.snapshot(id).await.unwrap().is_none());

    drop(handle);
    task.await.unwrap();
}

#[tokio::test]
async fn test_rejected_event_restores_session() {
    let (actor, handle) = SessionActor::<Basket>::new(10);
    tokio::spawn(actor.run(()));

    let id = handle.open(open("Bob")).await.unwrap();
    let err = handle.dispatch(id, BasketEvent::Checkout).await.unwrap_err();
    assert_eq!(
        err.into_entity_error::<BasketError>().unwrap(),
        BasketError::Empty
    );

    let basket = handle.snapshot(id).await.unwrap().unwrap();
    assert!(!basket.checked_out, "failed event must not leave partial state");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let (actor, handle) = SessionActor::<Basket>::new(10);
    tokio::spawn(actor.run(()));

    let a = handle.open(open("A")).await.unwrap();
    let b = handle.open(open("B")).await.unwrap();
    assert_ne!(a, b);

    handle.dispatch(a, BasketEvent::Put("burger".into())).await.unwrap();

    assert_eq!(handle.snapshot(a).await.unwrap().unwrap().items.len(), 1);
    assert!(handle.snapshot(b).await.unwrap().unwrap().items.is_empty());
    assert_eq!(handle.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unknown_session_and_failed_open() {
    let (actor, handle) = SessionActor::<Basket>::new(10);
    tokio::spawn(actor.run(()));

    let missing = handle.dispatch(99, BasketEvent::Checkout).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "99"));

    let closed = handle.close(99).await;
    assert!(matches!(closed, Err(FrameworkError::NotFound(_))));

    let blank = handle.open(open("  ")).await.unwrap_err();
    assert_eq!(
        blank.into_entity_error::<BasketError>().unwrap(),
        BasketError::BlankOwner
    );
    assert_eq!(handle.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_concurrent_handles_serialise_events() {
    let (actor, handle) = SessionActor::<Basket>::new(4);
    tokio::spawn(actor.run(()));
    let id = handle.open(open("Crowd")).await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let handle = handle.clone();
        tasks.push(tokio::spawn(async move {
            handle.dispatch(id, BasketEvent::Put(format!("item_{i}"))).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let basket = handle.snapshot(id).await.unwrap().unwrap();
    assert_eq!(basket.items.len(), 20);
}
