//! # EntityClient Trait
//!
//! Common interface for resource-specific clients, adding default `get`,
//! `select`, and `delete` methods built on top of a generic [`RegistryClient`].

use crate::{Entity, RegistryClient, RegistryError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard registry operations.
///
/// Wrapper clients (e.g. a `MenuClient` around `RegistryClient<MenuItem>`)
/// implement `inner()` and `map_error()` once and get `get`/`select`/`delete`
/// for free, each mapped into the resource's own error type.
#[async_trait]
pub trait EntityClient<T: Entity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic RegistryClient.
    fn inner(&self) -> &RegistryClient<T>;

    /// Map registry errors to the specific resource error type.
    fn map_error(e: RegistryError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// List every entity matching a filter.
    #[tracing::instrument(skip(self, filter))]
    async fn select(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().select(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
