//! # Mock Client
//!
//! `MockClient<T>` exposes the same [`RegistryClient`] API as the production
//! client but operates entirely in-memory against an expectation queue. It
//! enables fast, deterministic unit tests of client-side logic without
//! spawning any actors, and makes error injection trivial (`return_err`).
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | Speed | Instant (in-memory) | Fast (tokio spawn involved) |
//! | Determinism | 100% deterministic | Subject to scheduler |
//! | State | None (expectations only) | Real state management |
//! | Use case | Logic *around* the client | The actor itself / full system |
//! | Error injection | Easy (`return_err`) | Hard (needs specific state) |
//!
//! The raw helpers ([`create_mock_client`], [`expect_create`], [`expect_get`],
//! [`expect_action`]) give direct access to the request channel when a test
//! needs to inspect payloads rather than just script responses.

use crate::client::RegistryClient;
use crate::entity::Entity;
use crate::error::RegistryError;
use crate::message::RegistryRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Represents an expected request to the mock client.
enum Expectation<T: Entity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, RegistryError>,
    },
    Create {
        response: Result<T::Id, RegistryError>,
    },
    Select {
        response: Result<Vec<T>, RegistryError>,
    },
    Update {
        id: T::Id,
        response: Result<T, RegistryError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), RegistryError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, RegistryError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Restaurant>::new();
/// mock.expect_get(RestaurantId(1)).return_ok(Some(restaurant));
/// mock.expect_create().return_ok(RestaurantId(2));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Entity> {
    client: RegistryClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RegistryRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answering requests from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before async operations

                match (request, expectation) {
                    (
                        RegistryRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Select {
                            filter: _,
                            respond_to,
                        },
                        Some(Expectation::Select { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Action {
                            id: _,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: RegistryClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RegistryClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `select` operation.
    pub fn expect_select(&mut self) -> SelectExpectationBuilder<T> {
        SelectExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Entity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: RegistryError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: Entity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: RegistryError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `select` expectations.
pub struct SelectExpectationBuilder<T: Entity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> SelectExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Select {
            response: Ok(items),
        });
    }

    pub fn return_err(self, error: RegistryError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Select {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: Entity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: RegistryError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: Entity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: RegistryError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: Entity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Entity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: RegistryError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When a test cares about the *request payload* sent by a client wrapper
/// rather than scripting responses, it can receive raw [`RegistryRequest`]
/// messages from this channel, inspect them, and answer through the bundled
/// responder. This simulates the actor's behavior (success, failure, delays)
/// deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (RegistryClient<T>, mpsc::Receiver<RegistryRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Venue {
        id: u32,
        name: String,
        open: bool,
    }

    #[derive(Debug)]
    struct VenueCreate {
        name: String,
    }

    #[derive(Debug)]
    struct VenueUpdate;

    #[derive(Debug)]
    enum VenueAction {}

    #[derive(Debug)]
    struct OpenOnly(bool);

    #[derive(Debug, thiserror::Error)]
    #[error("Venue error")]
    struct VenueError;

    #[async_trait]
    impl Entity for Venue {
        type Id = u32;
        type Create = VenueCreate;
        type Update = VenueUpdate;
        type Action = VenueAction;
        type ActionResult = ();
        type Filter = OpenOnly;
        type Context = ();
        type Error = VenueError;

        fn from_create(id: u32, params: VenueCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                open: true,
            })
        }

        fn matches(&self, filter: &OpenOnly) -> bool {
            !filter.0 || self.open
        }

        async fn on_update(
            &mut self,
            _update: VenueUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: VenueAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Venue>(10);

        let create_task = tokio::spawn(async move {
            let venue = VenueCreate {
                name: "Trattoria Cinque".to_string(),
            };
            client.create(venue).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Trattoria Cinque");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Venue>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Venue {
            id: 1,
            name: "Trattoria Cinque".to_string(),
            open: true,
        }));
        mock.expect_select().return_ok(vec![]);

        let client = mock.client();

        let id = client
            .create(VenueCreate {
                name: "Trattoria Cinque".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Trattoria Cinque");

        let listed = client.select(OpenOnly(true)).await.unwrap();
        assert!(listed.is_empty());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Venue>::new();
        let client = mock.client();

        // Simulate a downstream failure
        mock.expect_get(1).return_err(RegistryError::ActorClosed);

        let result = client.get(1).await;
        assert!(matches!(result, Err(RegistryError::ActorClosed)));
    }
}
