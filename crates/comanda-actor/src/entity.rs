//! # Entity Trait
//!
//! The `Entity` trait is the contract every registry-managed resource (Restaurant,
//! MenuItem, ServiceCall, …) must implement. It declares associated types for IDs,
//! payloads, actions, filters, context, and errors, and provides async lifecycle
//! hooks. Implementing it gives the resource a uniform CRUD + Select + Action API
//! through [`RegistryActor`](crate::RegistryActor).
//!
//! # Architecture Note
//! By defining one contract that all resource types satisfy, the registry loop is
//! written once and reused everywhere. Associated types keep the API type-safe: a
//! `MenuItem` registry only accepts `MenuItemCreate` payloads, and the compiler
//! rejects everything else.
//!
//! # Provided Methods (Hooks)
//! `on_create` and `on_delete` have default no-op implementations; override them
//! only when creation or removal has side effects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `RegistryActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call out to other actors. The
/// `Context` type carries those dependencies and is injected into every hook,
/// late-bound through `run()` rather than fixed at construction.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// `From<u32>` enables automatic ID generation; `Ord` keeps the registry
    /// store ordered so listings come back in a stable order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations that fall outside plain CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for `Select` listings (e.g. "available items of
    /// restaurant X"). Use `()` when listings are never filtered.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity, one enum per actor.
    ///
    /// # Design Note: Error Granularity
    /// The registry enforces a per-actor error type rather than per-message
    /// error types. One enum per resource keeps client-side matching simple;
    /// the cost is that every operation's `Result` names the union type even
    /// when only a subset of variants can occur.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated ID and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity satisfies a `Select` filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is constructed and before it is
    /// stored. Use for validation or side effects against other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the registry.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
