//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Use it to
//! test code that sits *around* a client (HTTP handlers, domain clients)
//! deterministically, including failures that are hard to provoke with a real
//! actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real store |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Use Case** | Logic around the client | The actor itself, full system |
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: u64 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u64; type Create = NoteCreate; type Update = NoteUpdate;
//!     type Context = (); type Error = NoteError;
//!     fn from_create_params(id: u64, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in the order they were registered. A request
//! that does not match the next expectation (wrong operation or wrong ID)
//! makes the mock's task panic, which the caller observes as
//! [`FrameworkError::ActorDropped`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted reply.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check_id<I: PartialEq + std::fmt::Debug>(op: &str, expected: &I, actual: &I) {
    if expected != actual {
        panic!("{op}: expected id {expected:?}, got {actual:?}");
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_create().return_ok(user);
/// mock.expect_get(UserId(1)).return_ok(None);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = Arc::clone(&expectations);

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id("get", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id("update", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id("delete", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder::<Vec<T>>(Box::new(|response| Expectation::List { response }))
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder::<T>(Box::new(|response| Expectation::Create { response }))
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder::<Option<T>>(Box::new(move |response| Expectation::Get { id, response }))
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder::<T>(Box::new(move |response| Expectation::Update { id, response }))
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder::<()>(Box::new(move |response| Expectation::Delete { id, response }))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(&self, wrap: Wrap<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: Arc::clone(&self.expectations),
            wrap,
        }
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Builder returned by the `expect_*` methods; finish it with
/// [`return_ok`](ExpectationBuilder::return_ok) or
/// [`return_err`](ExpectationBuilder::return_err).
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Wrap<T, R>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to inspect the request payload itself; reply
/// through the `respond_to` sender of the received request.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Contact {
        id: u64,
        email: String,
    }

    #[derive(Debug)]
    struct ContactCreate {
        email: String,
    }

    #[derive(Debug)]
    struct ContactUpdate {
        email: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Contact error")]
    struct ContactError;

    #[async_trait]
    impl ActorEntity for Contact {
        type Id = u64;
        type Create = ContactCreate;
        type Update = ContactUpdate;
        type Context = ();
        type Error = ContactError;

        fn from_create_params(id: u64, params: ContactCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                email: params.email,
            })
        }

        async fn on_update(
            &mut self,
            update: ContactUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            if let Some(email) = update.email {
                self.email = email;
            }
            Ok(())
        }
    }

    fn contact(id: u64, email: &str) -> Contact {
        Contact {
            id,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Contact>(10);

        let create_task = tokio::spawn(async move {
            let params = ContactCreate {
                email: "test@example.com".to_string(),
            };
            client.create(params).await
        });

        match receiver.recv().await {
            Some(ResourceRequest::Create { params, respond_to }) => {
                assert_eq!(params.email, "test@example.com");
                respond_to.send(Ok(contact(1, &params.email))).unwrap();
            }
            other => panic!("Expected Create request, got {other:?}"),
        }

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, contact(1, "test@example.com"));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Contact>::new();

        mock.expect_create().return_ok(contact(1, "test@example.com"));
        mock.expect_get(1)
            .return_ok(Some(contact(1, "test@example.com")));
        mock.expect_update(1)
            .return_ok(contact(1, "new@example.com"));
        mock.expect_list()
            .return_ok(vec![contact(1, "new@example.com")]);
        mock.expect_delete(1).return_ok(());

        let client = mock.client();

        let created = client
            .create(ContactCreate {
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        let updated = client
            .update(
                1,
                ContactUpdate {
                    email: Some("new@example.com".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "new@example.com");

        assert_eq!(client.list().await.unwrap().len(), 1);
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
