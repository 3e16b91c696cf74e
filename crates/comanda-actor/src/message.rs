//! # Registry Messages
//!
//! This module defines the generic message types exchanged between a
//! [`RegistryClient`](crate::RegistryClient) and a [`RegistryActor`](crate::RegistryActor).

use crate::entity::Entity;
use crate::error::RegistryError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by registry actors.
pub type Respond<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Internal message type sent to a registry actor to request operations.
///
/// # Resource-Oriented Design
/// Each registry actor manages one resource type (the [`Entity`]). Instead of
/// ad-hoc messages per operation, requests standardize on the lifecycle
/// operations that apply to any managed resource:
///
/// - **Create**: Lifecycle start. Uses [`Entity::Create`] to initialize a resource.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **Select**: Lists every resource matching an [`Entity::Filter`] predicate.
/// - **Update**: Mutates an existing resource via [`Entity::Update`].
/// - **Delete**: Lifecycle end. Removes the resource.
/// - **Action**: Executes a custom [`Entity::Action`] that doesn't fit CRUD.
///
/// The enum is generic over `T: Entity`, so a `MenuItem` registry can never be
/// sent a `Restaurant` payload.
#[derive(Debug)]
pub enum RegistryRequest<T: Entity> {
    Create {
        params: T::Create,
        respond_to: Respond<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Respond<Option<T>>,
    },
    Select {
        filter: T::Filter,
        respond_to: Respond<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Respond<T>,
    },
    Delete { id: T::Id, respond_to: Respond<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Respond<T::ActionResult>,
    },
}
